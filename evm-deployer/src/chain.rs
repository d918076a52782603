// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! The chain as seen by the [`crate::Deployer`]: something that reads account code and
//! something that signs, sends and confirms transactions.
//!
//! Neither side retries. Submissions from one account must be serialized by the caller, nonces
//! are left to the signer.

use crate::common::{Address, Bytes, Gas, TxHash};
use crate::error::Result;
use alloy::rpc::types::TransactionRequest;
use std::future::Future;

/// What the deployer needs to know about a confirmed transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub tx_hash: TxHash,
    /// Set when the transaction was a contract creation.
    pub contract_address: Option<Address>,
    pub success: bool,
}

pub trait ChainReader {
    /// Code stored at `address`. Empty when no contract lives there.
    fn code_at(&self, address: Address) -> impl Future<Output = Result<Bytes>> + Send;
}

pub trait Signer {
    /// The account transactions are sent from.
    fn address(&self) -> Address;

    fn estimate_gas(&self, tx: TransactionRequest) -> impl Future<Output = Result<Gas>> + Send;

    /// Signs and broadcasts `tx`, then waits until it is mined.
    fn send_and_confirm(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<DeploymentReceipt>> + Send;
}

impl<T: ChainReader + Sync> ChainReader for &T {
    fn code_at(&self, address: Address) -> impl Future<Output = Result<Bytes>> + Send {
        (**self).code_at(address)
    }
}

impl<T: Signer + Sync> Signer for &T {
    fn address(&self) -> Address {
        (**self).address()
    }

    fn estimate_gas(&self, tx: TransactionRequest) -> impl Future<Output = Result<Gas>> + Send {
        (**self).estimate_gas(tx)
    }

    fn send_and_confirm(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<DeploymentReceipt>> + Send {
        (**self).send_and_confirm(tx)
    }
}

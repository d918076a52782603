// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::chain::{ChainReader, DeploymentReceipt, Signer};
use crate::common::{Address, Bytes, Gas};
use crate::error::Result;
use alloy::network::ReceiptResponse;
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;

/// Talks to a node through an alloy [`Provider`].
///
/// The provider is expected to fill and sign transactions for `signer`, e.g. one built with
/// `ProviderBuilder::new().wallet(wallet)`. A read-only provider is enough for [`ChainReader`].
#[derive(Clone, Debug)]
pub struct ProviderClient<P> {
    provider: P,
    signer: Address,
    confirmation_timeout: Option<Duration>,
}

impl<P: Provider> ProviderClient<P> {
    pub fn new(provider: P, signer: Address) -> Self {
        Self {
            provider,
            signer,
            confirmation_timeout: None,
        }
    }

    /// Give up waiting for a receipt after `timeout`. Waits forever by default.
    pub fn with_confirmation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: Provider> ChainReader for ProviderClient<P> {
    async fn code_at(&self, address: Address) -> Result<Bytes> {
        let code = self
            .provider
            .get_code_at(address)
            .await
            .inspect_err(|err| error!("Error fetching code at {address}: {err:?}"))?;
        debug!("Code at {address} is {} bytes long", code.len());
        Ok(code)
    }
}

impl<P: Provider> Signer for ProviderClient<P> {
    fn address(&self) -> Address {
        self.signer
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<Gas> {
        let gas = self
            .provider
            .estimate_gas(tx)
            .await
            .inspect_err(|err| error!("Error estimating gas: {err:?}"))?;
        debug!("Node estimated {gas} gas");
        Ok(gas)
    }

    async fn send_and_confirm(&self, tx: TransactionRequest) -> Result<DeploymentReceipt> {
        let pending_tx_builder = self
            .provider
            .send_transaction(tx)
            .await
            .inspect_err(|err| error!("Error to send_transaction: {err:?}"))?;

        debug!(
            "Transaction is pending with tx_hash: {:?}",
            pending_tx_builder.tx_hash()
        );

        let receipt = match self.confirmation_timeout {
            Some(timeout) => {
                tokio::time::timeout(timeout, pending_tx_builder.get_receipt()).await??
            }
            None => pending_tx_builder.get_receipt().await?,
        };

        let receipt = DeploymentReceipt {
            tx_hash: receipt.transaction_hash(),
            contract_address: receipt.contract_address(),
            success: receipt.status(),
        };
        debug!("Transaction confirmed: {receipt:?}");
        Ok(receipt)
    }
}

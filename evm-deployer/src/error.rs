// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, TxHash};
use alloy::providers::PendingTransactionError;
use alloy::transports::{RpcError, TransportErrorKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Factory bootstrap transaction confirmed but no code is present at {factory}")]
    FactoryBootstrapFailed { factory: Address },
    #[error("Deployment transaction confirmed but no code is present at {address}")]
    DeploymentFailed { address: Address },
    #[error("Receipt of transaction {0} does not report a created contract address")]
    MissingContractAddress(TxHash),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),
    #[error("Timeout: {0:?}")]
    Timeout(#[from] tokio::time::error::Elapsed),
}

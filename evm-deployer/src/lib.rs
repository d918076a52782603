// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Deterministic contract deployment through the shared CREATE2 factory.
//!
//! [`derive_address`] tells where init code lands for a given salt without touching the network.
//! [`Deployer`] deploys it there, bootstrapping the factory first on chains that lack it, and
//! sends nothing when the address already holds code.

#[macro_use]
extern crate tracing;

pub mod address;
pub mod chain;
pub mod common;
pub mod config;
pub mod deployer;
pub mod error;
pub mod factory;
pub mod gas;
pub mod init_code;
pub mod provider;
pub mod testnet;
pub mod utils;

pub use address::{create_address, derive_address, parse_salt};
pub use chain::{ChainReader, DeploymentReceipt, Signer};
pub use config::DeployerConfig;
pub use deployer::{factory_calldata, Deployer, Prediction};
pub use error::{Error, Result};
pub use factory::FactoryIdentity;
pub use gas::{estimate_deployment_gas, GasLimit};
pub use init_code::InitCode;
pub use provider::ProviderClient;

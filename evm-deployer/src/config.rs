// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::Address;
use crate::error::{Error, Result};
use crate::factory::{FactoryIdentity, FACTORY_ADDRESS};
use crate::provider::ProviderClient;
use alloy::network::{Ethereum, EthereumWallet, NetworkWallet};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// environment variable holding the HTTP RPC endpoint to deploy through
pub const RPC_URL: &str = "RPC_URL";
const RPC_URL_BUILD_TIME_VAL: Option<&str> = option_env!("RPC_URL");
/// environment variable overriding the factory address
pub const CREATE2_FACTORY_ADDRESS: &str = "CREATE2_FACTORY_ADDRESS";
/// environment variable bounding the wait for a transaction receipt, in seconds
pub const DEPLOY_CONFIRMATION_TIMEOUT_SECS: &str = "DEPLOY_CONFIRMATION_TIMEOUT_SECS";

const LOCAL_RPC_URL: &str = "http://localhost:8545";

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeployerConfig {
    #[serde_as(as = "DisplayFromStr")]
    pub rpc_url_http: Url,
    pub factory_address: Address,
    #[serde(default)]
    pub confirmation_timeout_secs: Option<u64>,
}

impl DeployerConfig {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let rpc_url_http = Url::parse(rpc_url)
            .map_err(|err| Error::Config(format!("Invalid RPC URL {rpc_url:?}: {err}")))?;
        Ok(Self {
            rpc_url_http,
            factory_address: FACTORY_ADDRESS,
            confirmation_timeout_secs: None,
        })
    }

    /// A local Anvil node on its default port.
    pub fn local() -> Self {
        Self {
            rpc_url_http: Url::parse(LOCAL_RPC_URL).expect("Invalid RPC URL"),
            factory_address: FACTORY_ADDRESS,
            confirmation_timeout_secs: None,
        }
    }

    /// Reads the configuration from environment variables.
    ///
    /// [`RPC_URL`] is required, falling back to its value at build time. The factory defaults to
    /// the canonical one and receipts are awaited without timeout.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok()).inspect_err(|err| {
            warn!("Failed to read deployer configuration from ENV: {err}");
        })
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let rpc_url = var(RPC_URL)
            .or_else(|| RPC_URL_BUILD_TIME_VAL.map(|s| s.to_string()))
            .ok_or_else(|| Error::Config(format!("missing env var, make sure to set {RPC_URL}")))?;

        let mut config = Self::new(&rpc_url)?;

        if let Some(factory) = var(CREATE2_FACTORY_ADDRESS) {
            config.factory_address = Address::from_str(factory.trim()).map_err(|err| {
                Error::Config(format!("Invalid {CREATE2_FACTORY_ADDRESS} {factory:?}: {err}"))
            })?;
            info!("Using factory at {} from environment variables", config.factory_address);
        }

        if let Some(timeout) = var(DEPLOY_CONFIRMATION_TIMEOUT_SECS) {
            let secs = timeout.trim().parse::<u64>().map_err(|err| {
                Error::Config(format!(
                    "Invalid {DEPLOY_CONFIRMATION_TIMEOUT_SECS} {timeout:?}: {err}"
                ))
            })?;
            config.confirmation_timeout_secs = Some(secs);
        }

        Ok(config)
    }

    pub fn factory_identity(&self) -> FactoryIdentity {
        FactoryIdentity::at(self.factory_address)
    }

    pub fn confirmation_timeout(&self) -> Option<Duration> {
        self.confirmation_timeout_secs.map(Duration::from_secs)
    }

    /// Connects to the configured node, signing with the default signer of `wallet`.
    pub fn connect(&self, wallet: EthereumWallet) -> ProviderClient<impl Provider + Clone> {
        let signer = <EthereumWallet as NetworkWallet<Ethereum>>::default_signer_address(&wallet);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.rpc_url_http.clone());

        ProviderClient::new(provider, signer)
            .with_confirmation_timeout(self.confirmation_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_from_vars_defaults() {
        let config =
            DeployerConfig::from_vars(vars(&[(RPC_URL, "http://127.0.0.1:8545")])).expect("config");

        assert_eq!(config.rpc_url_http.as_str(), "http://127.0.0.1:8545/");
        assert_eq!(config.factory_address, FACTORY_ADDRESS);
        assert_eq!(config.confirmation_timeout(), None);
        assert_eq!(config.factory_identity(), FactoryIdentity::canonical());
    }

    #[test]
    fn test_config_from_vars_overrides() {
        let config = DeployerConfig::from_vars(vars(&[
            (RPC_URL, "http://127.0.0.1:8545"),
            (CREATE2_FACTORY_ADDRESS, "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            (DEPLOY_CONFIRMATION_TIMEOUT_SECS, "30"),
        ]))
        .expect("config");

        assert_eq!(
            config.factory_address,
            alloy::primitives::address!("5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_eq!(config.confirmation_timeout(), Some(Duration::from_secs(30)));
        assert!(!config.factory_identity().is_canonical());
    }

    #[test]
    fn test_config_from_vars_rejects_bad_values() {
        let bad_factory = DeployerConfig::from_vars(vars(&[
            (RPC_URL, "http://127.0.0.1:8545"),
            (CREATE2_FACTORY_ADDRESS, "0x1234"),
        ]));
        assert!(matches!(bad_factory, Err(Error::Config(_))));

        let bad_url = DeployerConfig::from_vars(vars(&[(RPC_URL, "not a url")]));
        assert!(matches!(bad_url, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = DeployerConfig::local();
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("\"rpc_url_http\":\"http://localhost:8545/\""));

        let parsed: DeployerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, config);
    }
}

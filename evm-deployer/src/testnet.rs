// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Chains to deploy against in tests: an in-memory [`MockChain`] and local Anvil nodes.

use crate::chain::{ChainReader, DeploymentReceipt, Signer};
use crate::common::{Address, Bytes, Gas, TxHash, U256};
use crate::error::Result;
use crate::factory::{FACTORY_ADDRESS, FACTORY_BOOTSTRAP_CODE, FACTORY_RUNTIME_CODE};
use crate::provider::ProviderClient;
use alloy::network::EthereumWallet;
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::TxKind;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use alloy::transports::TransportErrorKind;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Gas reported by [`MockChain::estimate_gas`] unless set otherwise.
pub const MOCK_GAS_ESTIMATE: Gas = 123_456;

/// An in-memory chain acting as both [`Signer`] and [`ChainReader`].
///
/// Contract creations land at the CREATE address of the signer. Calls to an account holding the
/// factory runtime code run CREATE2 and store the init code as the deployed code. Every submitted
/// transaction is recorded. Clones share the same state.
#[derive(Clone, Debug)]
pub struct MockChain {
    signer: Address,
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug)]
struct MockState {
    code: HashMap<Address, Bytes>,
    nonce: u64,
    transactions: Vec<TransactionRequest>,
    code_reads: usize,
    gas_estimate: Gas,
    bootstrap_leaves_no_code: bool,
    deployments_leave_no_code: bool,
    reads_fail: bool,
    omit_contract_address: bool,
}

impl MockChain {
    /// An empty chain, without factory.
    pub fn new(signer: Address) -> Self {
        Self {
            signer,
            state: Arc::new(Mutex::new(MockState {
                code: HashMap::new(),
                nonce: 0,
                transactions: vec![],
                code_reads: 0,
                gas_estimate: MOCK_GAS_ESTIMATE,
                bootstrap_leaves_no_code: false,
                deployments_leave_no_code: false,
                reads_fail: false,
                omit_contract_address: false,
            })),
        }
    }

    /// A chain with the factory already live at its canonical address.
    pub fn with_canonical_factory(signer: Address) -> Self {
        let chain = Self::new(signer);
        chain.set_code(FACTORY_ADDRESS, Bytes::from_static(FACTORY_RUNTIME_CODE));
        chain
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_code(&self, address: Address, code: Bytes) {
        let _ = self.state().code.insert(address, code);
    }

    pub fn code(&self, address: Address) -> Bytes {
        self.state().code.get(&address).cloned().unwrap_or_default()
    }

    /// Transactions submitted so far, oldest first.
    pub fn transactions(&self) -> Vec<TransactionRequest> {
        self.state().transactions.clone()
    }

    /// Number of code lookups served so far.
    pub fn code_reads(&self) -> usize {
        self.state().code_reads
    }

    pub fn set_gas_estimate(&self, gas: Gas) {
        self.state().gas_estimate = gas;
    }

    /// Contract creations are mined but leave no code behind.
    pub fn break_bootstrap(&self) {
        self.state().bootstrap_leaves_no_code = true;
    }

    /// Factory calls are mined but deploy nothing, as if they ran out of gas.
    pub fn break_deployments(&self) {
        self.state().deployments_leave_no_code = true;
    }

    /// Receipts of contract creations do not report the created address.
    pub fn omit_contract_address(&self) {
        self.state().omit_contract_address = true;
    }

    /// Code lookups fail with a transport error.
    pub fn fail_reads(&self) {
        self.state().reads_fail = true;
    }
}

impl ChainReader for MockChain {
    async fn code_at(&self, address: Address) -> Result<Bytes> {
        let mut state = self.state();
        if state.reads_fail {
            return Err(TransportErrorKind::custom_str("connection refused").into());
        }
        state.code_reads += 1;
        Ok(state.code.get(&address).cloned().unwrap_or_default())
    }
}

impl Signer for MockChain {
    fn address(&self) -> Address {
        self.signer
    }

    async fn estimate_gas(&self, _tx: TransactionRequest) -> Result<Gas> {
        Ok(self.state().gas_estimate)
    }

    async fn send_and_confirm(&self, tx: TransactionRequest) -> Result<DeploymentReceipt> {
        let mut state = self.state();

        let nonce = state.nonce;
        state.nonce += 1;
        state.transactions.push(tx.clone());

        let tx_hash = TxHash::from(U256::from(state.transactions.len()));
        let input = tx.input.input().cloned().unwrap_or_default();

        match tx.to {
            None | Some(TxKind::Create) => {
                let created = self.signer.create(nonce);
                if !state.bootstrap_leaves_no_code {
                    let code = if input.as_ref() == FACTORY_BOOTSTRAP_CODE {
                        Bytes::from_static(FACTORY_RUNTIME_CODE)
                    } else {
                        input
                    };
                    let _ = state.code.insert(created, code);
                }
                Ok(DeploymentReceipt {
                    tx_hash,
                    contract_address: (!state.omit_contract_address).then_some(created),
                    success: true,
                })
            }
            Some(TxKind::Call(to)) => {
                let is_factory = state
                    .code
                    .get(&to)
                    .is_some_and(|code| code.as_ref() == FACTORY_RUNTIME_CODE);

                let mut success = false;
                if is_factory && input.len() >= 32 && !state.deployments_leave_no_code {
                    let mut salt = [0u8; 32];
                    salt.copy_from_slice(&input[..32]);
                    let init_code = Bytes::copy_from_slice(&input[32..]);
                    let target = to.create2_from_code(salt, &init_code);

                    if state.code.get(&target).map_or(true, |code| code.is_empty()) {
                        let _ = state.code.insert(target, init_code);
                        success = true;
                    }
                }
                Ok(DeploymentReceipt {
                    tx_hash,
                    contract_address: None,
                    success,
                })
            }
        }
    }
}

/// Runs a local Anvil node bound to a specified IP address.
///
/// The `AnvilInstance` `endpoint` function is hardcoded to return "localhost", so we must also
/// return the RPC URL if we want to listen on a different address.
///
/// The `anvil` binary respects the `ANVIL_IP_ADDR` environment variable, but defaults to
/// "localhost".
/// Anvil predeploys the factory at its canonical address.
pub fn start_node() -> (AnvilInstance, Url) {
    spawn(Anvil::new())
}

/// Runs a local Anvil node that accepts transactions but never mines them.
pub fn start_node_without_mining() -> (AnvilInstance, Url) {
    spawn(Anvil::new().arg("--no-mining"))
}

/// Runs a local Anvil node without the factory predeployed.
pub fn start_node_without_factory() -> (AnvilInstance, Url) {
    spawn(Anvil::new().arg("--disable-default-create2-deployer"))
}

fn spawn(anvil: Anvil) -> (AnvilInstance, Url) {
    let host = std::env::var("ANVIL_IP_ADDR").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("ANVIL_PORT")
        .unwrap_or(0.to_string())
        .parse::<u16>()
        .expect("Invalid port number");

    let anvil = anvil
        .port(port)
        .try_spawn()
        .expect("Could not spawn Anvil node");

    // We have to manually return the RPC URL because the `anvil::endpoint_url()` always returns
    // `localhost`
    let url = Url::parse(&format!("http://{host}:{}", anvil.port())).expect("Failed to parse URL");

    (anvil, url)
}

/// A client signing with the `index`th default Anvil account.
pub fn anvil_client(
    rpc_url: &Url,
    anvil: &AnvilInstance,
    index: usize,
) -> ProviderClient<impl Provider + Clone> {
    let signer: PrivateKeySigner = anvil.keys()[index].clone().into();
    let address = signer.address();
    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(rpc_url.clone());

    ProviderClient::new(provider, address)
}

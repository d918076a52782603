// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::address::derive_address;
use crate::chain::{ChainReader, Signer};
use crate::common::{Address, Calldata, Gas, Salt, U256};
use crate::error::{Error, Result};
use crate::factory::FactoryIdentity;
use crate::gas::{estimate_deployment_gas, GasLimit};
use crate::init_code::InitCode;
use alloy::network::TransactionBuilder;
use alloy::rpc::types::TransactionRequest;

/// Factory call data: the salt as 32 big-endian bytes followed by the init code.
pub fn factory_calldata(salt: Salt, init_code: &[u8]) -> Calldata {
    let mut calldata = Vec::with_capacity(32 + init_code.len());
    calldata.extend_from_slice(&salt.to_be_bytes::<32>());
    calldata.extend_from_slice(init_code);
    calldata.into()
}

/// Where a deployment would land and whether something already lives there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prediction {
    pub address: Address,
    pub deployed: bool,
}

/// Deploys contracts at predictable addresses through the shared CREATE2 factory.
///
/// Deploying the same init code with the same salt twice sends a single transaction, the second
/// call finds code at the target address and returns it.
///
/// The deployer remembers once it has seen code at the factory address and never checks again.
/// A factory destroyed afterwards goes unnoticed for the lifetime of this instance.
///
/// Calls on one instance are sequential. Instances sharing a signing account must not deploy
/// concurrently, nonces are not coordinated here.
#[derive(Debug)]
pub struct Deployer<S, R> {
    factory: FactoryIdentity,
    factory_live: bool,
    signer: S,
    reader: R,
}

impl<S: Signer, R: ChainReader> Deployer<S, R> {
    /// Create a deployer using the canonical factory.
    pub fn new(signer: S, reader: R) -> Self {
        Self::with_factory(signer, reader, FactoryIdentity::canonical())
    }

    pub fn with_factory(signer: S, reader: R, factory: FactoryIdentity) -> Self {
        Self {
            factory,
            factory_live: false,
            signer,
            reader,
        }
    }

    pub fn factory(&self) -> &FactoryIdentity {
        &self.factory
    }

    /// Whether code was already seen at the factory address.
    pub fn is_factory_live(&self) -> bool {
        self.factory_live
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Address `init_code` deploys to with `salt` through the current factory.
    pub fn derive_address(&self, salt: Salt, init_code: &[u8]) -> Address {
        derive_address(self.factory.address, salt, init_code)
    }

    /// Makes sure the factory has code, creating it from the signer's account if it has none.
    ///
    /// The creation transaction is a regular one, so the factory only lands at the canonical
    /// address if the signer is the canonical deployer at nonce 0. Wherever it lands, the
    /// factory address is updated to the one reported by the receipt.
    pub async fn ensure_factory_deployed(&mut self) -> Result<()> {
        if self.factory_live {
            return Ok(());
        }

        let code = self.reader.code_at(self.factory.address).await?;
        if !code.is_empty() {
            debug!("Factory is live at {}", self.factory.address);
            self.factory_live = true;
            return Ok(());
        }

        let from = self.signer.address();
        info!(
            "No factory code at {}, bootstrapping it from {from}",
            self.factory.address
        );

        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(self.factory.bootstrap_code.clone())
            .with_gas_limit(self.factory.gas_limit)
            .with_value(U256::ZERO);

        let receipt = self.signer.send_and_confirm(tx).await?;
        let created = receipt
            .contract_address
            .ok_or(Error::MissingContractAddress(receipt.tx_hash))?;

        if created != self.factory.address {
            warn!(
                "Factory was created at {created} instead of {}, using the new address",
                self.factory.address
            );
            self.factory.address = created;
        }

        let code = self.reader.code_at(self.factory.address).await?;
        if code.is_empty() {
            error!(
                "Factory bootstrap transaction {} confirmed but left no code at {}",
                receipt.tx_hash, self.factory.address
            );
            return Err(Error::FactoryBootstrapFailed {
                factory: self.factory.address,
            });
        }

        info!("Factory bootstrapped at {}", self.factory.address);
        self.factory_live = true;
        Ok(())
    }

    /// Derives the deployment address and checks whether it already has code. Sends nothing.
    pub async fn predict(&self, init_code: impl Into<InitCode>, salt: Salt) -> Result<Prediction> {
        let init_code = init_code.into().into_bytes()?;
        let address = self.derive_address(salt, &init_code);
        let deployed = !self.reader.code_at(address).await?.is_empty();
        Ok(Prediction { address, deployed })
    }

    /// Deploys `init_code` with `salt` through the factory and returns the contract address.
    ///
    /// Nothing is sent if code already lives at the derived address. Fails with
    /// [`Error::DeploymentFailed`] if the transaction is mined but the address is still empty.
    pub async fn deploy(
        &mut self,
        init_code: impl Into<InitCode>,
        salt: Salt,
        gas_limit: GasLimit,
    ) -> Result<Address> {
        let init_code = init_code.into().into_bytes()?;

        self.ensure_factory_deployed().await?;

        let address = self.derive_address(salt, &init_code);

        if !self.reader.code_at(address).await?.is_empty() {
            info!("Contract already deployed at {address}, skipping deployment");
            return Ok(address);
        }

        let tx = TransactionRequest::default()
            .with_from(self.signer.address())
            .with_to(self.factory.address)
            .with_input(factory_calldata(salt, &init_code));

        let gas: Gas = match gas_limit {
            GasLimit::Estimate => self.signer.estimate_gas(tx.clone()).await?,
            GasLimit::Fixed(gas) => gas,
            GasLimit::Manual => estimate_deployment_gas(&init_code),
        };
        debug!(
            "Deploying {} bytes of init code to {address} with gas limit {gas} ({gas_limit})",
            init_code.len()
        );

        let receipt = self.signer.send_and_confirm(tx.with_gas_limit(gas)).await?;
        if !receipt.success {
            warn!("Deployment transaction {} reverted", receipt.tx_hash);
        }

        if self.reader.code_at(address).await?.is_empty() {
            error!(
                "Deployment transaction {} confirmed but left no code at {address}",
                receipt.tx_hash
            );
            return Err(Error::DeploymentFailed { address });
        }

        info!("Contract deployed at {address} by transaction {}", receipt.tx_hash);
        Ok(address)
    }
}

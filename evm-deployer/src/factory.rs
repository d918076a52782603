// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Identity of the shared CREATE2 factory, the keyless "deterministic deployment proxy".
//!
//! The factory is created by the very first transaction of [`FACTORY_DEPLOYER`], an account
//! nobody holds the key of. Its signed creation transaction is public, so anyone can fund the
//! deployer with [`FACTORY_FUNDING_FEE`] and broadcast it, which always lands the factory at
//! [`FACTORY_ADDRESS`] on chains accepting pre-EIP-155 transactions.
//!
//! The factory takes `salt (32 bytes) ++ init_code` as call data and executes CREATE2 with them.

use crate::common::{Address, Amount, Bytes, Gas};
use alloy::primitives::{address, hex};

/// Canonical address of the factory.
pub const FACTORY_ADDRESS: Address = address!("4e59b44847b379578588920ca78fbf26c0b4956c");

/// The account whose nonce 0 transaction creates the factory.
pub const FACTORY_DEPLOYER: Address = address!("3fAB184622Dc19b6109349B94811493BF2a45362");

/// Gas price of the pre-signed bootstrap transaction (100 gwei).
pub const FACTORY_GAS_PRICE: u128 = 100_000_000_000;

/// Gas limit of the pre-signed bootstrap transaction.
pub const FACTORY_GAS_LIMIT: Gas = 100_000;

/// Wei the deployer must hold to broadcast the bootstrap transaction (0.01 ETH).
pub const FACTORY_FUNDING_FEE: u128 = FACTORY_GAS_PRICE * FACTORY_GAS_LIMIT as u128;

/// Creation code of the factory.
pub const FACTORY_BOOTSTRAP_CODE: &[u8] = &hex!(
    "604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "ffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf3"
);

/// Runtime code left at the factory address once the creation code ran.
pub const FACTORY_RUNTIME_CODE: &[u8] = &hex!(
    "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035"
    "828234f58015156039578182fd5b8082525050506014600cf3"
);

/// The RLP encoded, pre-signed (v = 27, r = s = 0x2222...) bootstrap transaction.
pub const FACTORY_BOOTSTRAP_TRANSACTION: &[u8] = &hex!(
    "f8a58085174876e800830186a08080b853604580600e600039806000f350fe7fffffffffffffffffffffffff"
    "ffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd"
    "5b8082525050506014600cf31ba0222222222222222222222222222222222222222222222222222222222222"
    "2222a02222222222222222222222222222222222222222222222222222222222222222"
);

/// Where the factory lives and how it is bootstrapped.
///
/// Everything but `address` is fixed. `address` starts at [`FACTORY_ADDRESS`] and is replaced
/// by the coordinator when bootstrapping the factory from a regular account lands it elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryIdentity {
    pub address: Address,
    pub deployer: Address,
    pub bootstrap_code: Bytes,
    pub bootstrap_transaction: Bytes,
    pub gas_price: u128,
    pub gas_limit: Gas,
}

impl FactoryIdentity {
    /// The canonical deterministic deployment proxy.
    pub fn canonical() -> Self {
        Self {
            address: FACTORY_ADDRESS,
            deployer: FACTORY_DEPLOYER,
            bootstrap_code: Bytes::from_static(FACTORY_BOOTSTRAP_CODE),
            bootstrap_transaction: Bytes::from_static(FACTORY_BOOTSTRAP_TRANSACTION),
            gas_price: FACTORY_GAS_PRICE,
            gas_limit: FACTORY_GAS_LIMIT,
        }
    }

    /// The canonical factory expected at a different address, e.g. one already bootstrapped
    /// from a regular account on a private chain.
    pub fn at(address: Address) -> Self {
        Self {
            address,
            ..Self::canonical()
        }
    }

    /// Wei needed to pay for the bootstrap transaction.
    pub fn funding_fee(&self) -> Amount {
        Amount::from(self.gas_price) * Amount::from(self.gas_limit)
    }

    /// Whether the factory is expected at the address the deployer's first transaction creates.
    pub fn is_canonical(&self) -> bool {
        self.address == self.deployer.create(0)
    }
}

impl Default for FactoryIdentity {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::keccak256;

    #[test]
    fn test_factory_address_is_created_by_deployer_at_nonce_zero() {
        assert_eq!(FACTORY_DEPLOYER.create(0), FACTORY_ADDRESS);
        assert!(FactoryIdentity::canonical().is_canonical());
        assert!(!FactoryIdentity::at(FACTORY_DEPLOYER).is_canonical());
    }

    #[test]
    fn test_funding_fee() {
        let factory = FactoryIdentity::canonical();
        assert_eq!(FACTORY_FUNDING_FEE, 10_000_000_000_000_000);
        assert_eq!(factory.funding_fee(), Amount::from(FACTORY_FUNDING_FEE));
    }

    #[test]
    fn test_bootstrap_transaction_carries_fixed_parameters() {
        let raw = FACTORY_BOOTSTRAP_TRANSACTION;

        // list header, nonce 0, gas price, gas limit, empty `to`, zero value
        assert_eq!(&raw[..2], &hex!("f8a5"));
        assert_eq!(raw[2], 0x80);
        assert_eq!(&raw[3..9], &hex!("85174876e800"));
        let mut gas_price = [0u8; 16];
        gas_price[11..].copy_from_slice(&raw[4..9]);
        assert_eq!(u128::from_be_bytes(gas_price), FACTORY_GAS_PRICE);
        assert_eq!(&raw[9..13], &hex!("830186a0"));
        assert_eq!(&raw[13..15], &hex!("8080"));

        // the data field is the creation code
        assert_eq!(&raw[15..17], &hex!("b853"));
        assert_eq!(FACTORY_BOOTSTRAP_CODE.len(), 0x53);
        assert_eq!(&raw[17..17 + FACTORY_BOOTSTRAP_CODE.len()], FACTORY_BOOTSTRAP_CODE);
        assert_eq!(raw.len(), 2 + 0xa5);
    }

    #[test]
    fn test_runtime_code_is_tail_of_bootstrap_code() {
        assert!(FACTORY_BOOTSTRAP_CODE.ends_with(FACTORY_RUNTIME_CODE));
        assert_eq!(
            keccak256(FACTORY_RUNTIME_CODE),
            alloy::primitives::b256!(
                "2fa86add0aed31f33a762c9d88e807c475bd51d0f52bd0955754b2608f7e4989"
            )
        );
    }
}

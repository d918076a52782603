// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Off-chain derivation of contract addresses.

use crate::common::{Address, Salt};
use crate::error::{Error, Result};
use alloy::primitives::keccak256;
use std::str::FromStr;

/// Prefix byte of the CREATE2 preimage. Keeps it apart from the RLP preimage of CREATE.
const CREATE2_PREFIX: u8 = 0xff;

/// Computes the address a contract lands at when `factory` executes CREATE2 with `salt` and
/// `init_code`.
///
/// ```text
/// address = keccak256(0xff ++ factory ++ salt ++ keccak256(init_code))[12:]
/// ```
pub fn derive_address(factory: Address, salt: Salt, init_code: &[u8]) -> Address {
    let init_code_hash = keccak256(init_code);

    let mut preimage = [0u8; 1 + 20 + 32 + 32];
    preimage[0] = CREATE2_PREFIX;
    preimage[1..21].copy_from_slice(factory.as_slice());
    preimage[21..53].copy_from_slice(&salt.to_be_bytes::<32>());
    preimage[53..].copy_from_slice(init_code_hash.as_slice());

    let hash = keccak256(preimage);
    Address::from_slice(&hash[12..])
}

/// Computes the address of a contract created by `deployer` with a plain CREATE at `nonce`.
pub fn create_address(deployer: Address, nonce: u64) -> Address {
    deployer.create(nonce)
}

/// Parses a salt given either in decimal or as a `0x` prefixed hex string.
///
/// Fails with [`Error::InvalidArgument`] when the value does not fit in 256 bits.
pub fn parse_salt(value: &str) -> Result<Salt> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidArgument("salt must not be empty".to_string()));
    }
    Salt::from_str(value).map_err(|err| {
        Error::InvalidArgument(format!("salt {value:?} is not a 256-bit integer: {err}"))
    })
}

// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::Gas;

/// Gas charged per zero byte of transaction data.
const TX_DATA_ZERO_GAS: Gas = 4;
/// Gas charged per non-zero byte of transaction data.
const TX_DATA_NON_ZERO_GAS: Gas = 16;
/// Gas charged per byte of deployed code. Charged on the whole init code as the size of the
/// runtime code is unknown upfront.
const CODE_DEPOSIT_GAS: Gas = 200;
/// Gas charged per 32 byte word hashed by CREATE2, here counted per 64 bytes.
const HASH_WORD_GAS: Gas = 6;
const CREATE_GAS: Gas = 32_000;
const TX_BASE_GAS: Gas = 21_000;

/// How the gas limit of a deployment transaction is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GasLimit {
    /// Compute the limit offline with [`estimate_deployment_gas`].
    #[default]
    Manual,
    /// Ask the node to estimate the transaction.
    Estimate,
    /// Use the given limit as is.
    Fixed(Gas),
}

impl std::str::FromStr for GasLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manual" => Ok(GasLimit::Manual),
            "estimate" => Ok(GasLimit::Estimate),
            value => value
                .parse::<Gas>()
                .map(GasLimit::Fixed)
                .map_err(|_| format!("Invalid gas limit: {value}")),
        }
    }
}

impl std::fmt::Display for GasLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GasLimit::Manual => write!(f, "manual"),
            GasLimit::Estimate => write!(f, "estimate"),
            GasLimit::Fixed(gas) => write!(f, "{gas}"),
        }
    }
}

/// Offline gas limit for deploying `init_code` through the factory.
///
/// Data cost, code deposit and hashing of the init code plus the CREATE and transaction base
/// costs, scaled by 64/63 since the factory only forwards 63/64 of its remaining gas.
pub fn estimate_deployment_gas(init_code: &[u8]) -> Gas {
    let len = init_code.len() as Gas;

    let data_cost: Gas = init_code
        .iter()
        .map(|byte| {
            if *byte == 0 {
                TX_DATA_ZERO_GAS
            } else {
                TX_DATA_NON_ZERO_GAS
            }
        })
        .sum();
    let deposit_cost = CODE_DEPOSIT_GAS * len;
    let hash_cost = HASH_WORD_GAS * len.div_ceil(64);

    let raw = data_cost + deposit_cost + hash_cost + CREATE_GAS + TX_BASE_GAS;
    raw * 64 / 63
}

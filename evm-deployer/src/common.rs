// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

pub use alloy::primitives::{Address, Bytes, TxHash, B256, U256};

/// Raw call data of a transaction.
pub type Calldata = Bytes;
/// The 256-bit value mixed into a CREATE2 address.
pub type Salt = U256;
/// Amount of gas units.
pub type Gas = u64;
/// Amount in wei.
pub type Amount = U256;

// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, Salt};

/// Generate a random Address.
pub fn dummy_address() -> Address {
    use rand::Rng;
    Address::new(rand::rngs::OsRng.r#gen())
}

/// Generate a random Salt.
pub fn dummy_salt() -> Salt {
    use rand::Rng;
    Salt::from_be_bytes(rand::rngs::OsRng.r#gen::<[u8; 32]>())
}

// Copyright 2025 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::Bytes;
use crate::error::{Error, Result};
use alloy::network::TransactionBuilder;
use alloy::primitives::hex;
use alloy::rpc::types::TransactionRequest;

/// Code handed to [`crate::Deployer::deploy`].
///
/// Either the init code itself, or a transaction request (as produced by contract bindings for
/// a plain CREATE deployment) whose data payload is the init code.
#[derive(Clone, Debug)]
pub enum InitCode {
    Raw(Bytes),
    Transaction(Box<TransactionRequest>),
}

impl InitCode {
    /// Parses hex encoded init code, with or without `0x` prefix.
    pub fn from_hex(value: &str) -> Result<Self> {
        hex::decode(value.trim())
            .map(|code| InitCode::Raw(code.into()))
            .map_err(|err| Error::InvalidArgument(format!("init code is not valid hex: {err}")))
    }

    /// Returns the raw init code.
    pub fn into_bytes(self) -> Result<Bytes> {
        match self {
            InitCode::Raw(code) => Ok(code),
            InitCode::Transaction(tx) => tx.input.input().cloned().ok_or_else(|| {
                Error::InvalidArgument("transaction request carries no init code".to_string())
            }),
        }
    }
}

impl From<Bytes> for InitCode {
    fn from(code: Bytes) -> Self {
        InitCode::Raw(code)
    }
}

impl From<Vec<u8>> for InitCode {
    fn from(code: Vec<u8>) -> Self {
        InitCode::Raw(code.into())
    }
}

impl From<&[u8]> for InitCode {
    fn from(code: &[u8]) -> Self {
        InitCode::Raw(Bytes::copy_from_slice(code))
    }
}

impl<const N: usize> From<[u8; N]> for InitCode {
    fn from(code: [u8; N]) -> Self {
        InitCode::Raw(Bytes::copy_from_slice(&code))
    }
}

impl From<TransactionRequest> for InitCode {
    fn from(tx: TransactionRequest) -> Self {
        InitCode::Transaction(Box::new(tx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_init_code() {
        let code = Bytes::from_static(&[0x60, 0x00]);
        let init_code = InitCode::from(code.clone());
        assert_eq!(init_code.into_bytes().expect("raw code"), code);
    }

    #[test]
    fn test_transaction_init_code_is_its_data() {
        let code = Bytes::from_static(&hex!("600a600c600055"));
        let tx = TransactionRequest::default().with_deploy_code(code.clone());

        assert_eq!(InitCode::from(tx).into_bytes().expect("deploy code"), code);
    }

    #[test]
    fn test_transaction_without_data_is_rejected() {
        let init_code = InitCode::from(TransactionRequest::default());
        assert!(matches!(init_code.into_bytes(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_from_hex() {
        let with_prefix = InitCode::from_hex("0x600a600c600055").expect("valid hex");
        let without_prefix = InitCode::from_hex("600a600c600055").expect("valid hex");

        assert_eq!(
            with_prefix.into_bytes().expect("raw code"),
            without_prefix.into_bytes().expect("raw code")
        );
        assert!(matches!(InitCode::from_hex("0x6g"), Err(Error::InvalidArgument(_))));
        assert!(matches!(InitCode::from_hex("0x600"), Err(Error::InvalidArgument(_))));
    }
}

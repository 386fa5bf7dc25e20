// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Post-deployment check that the token reports the expected name.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::{
        byte_array::ByteArray,
        deployment::sncast::SncastConfig,
        felt::Felt,
    },
    error::CommandError,
};

/// Read-only entrypoint returning the token name as a `ByteArray`.
pub const NAME_FUNCTION: &str = "name";

static HEX_FELT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x[0-9a-fA-F]+").expect("valid felt pattern"));

/// Calls `name()` on a deployed token.
pub trait NameReader {
    /// Returns the raw, human-readable response of the call.
    fn read_name(&self, contract: &Felt) -> Result<String, VerificationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("{0}")]
    Command(#[from] CommandError),
}

/// Reads the token name with `sncast call`.
#[derive(Clone, Debug, Default)]
pub struct SncastNameReader {
    config: SncastConfig,
}

impl SncastNameReader {
    pub fn new(config: SncastConfig) -> Self {
        Self { config }
    }

    pub fn call_args(&self, contract: &Felt) -> Vec<String> {
        let mut args = self.config.profile_args();
        args.extend([
            "call".to_owned(),
            "--contract-address".to_owned(),
            contract.to_string(),
            "--function".to_owned(),
            NAME_FUNCTION.to_owned(),
        ]);
        args
    }
}

impl NameReader for SncastNameReader {
    fn read_name(&self, contract: &Felt) -> Result<String, VerificationError> {
        let output = self.config.run(&self.call_args(contract))?;
        Ok(output.stdout)
    }
}

/// Checks that `name()` of the contract at `address` matches `expected_name`.
///
/// The response matches if it contains the name verbatim, or if its felts decode to a
/// `ByteArray` holding the name.
pub fn verify_deployment(
    reader: &impl NameReader,
    address: &Felt,
    expected_name: &str,
) -> Result<bool, VerificationError> {
    greyln!("verifying deployment...");
    greyln!("  contract address: {}", address);
    greyln!("  expected name: {}", expected_name);

    let response = reader.read_name(address)?;
    debug!(@grey, "name() response: {}", response.trim());

    let verified = response.contains(expected_name)
        || decode_name(&response).is_some_and(|name| name == expected_name);
    if verified {
        info!(@mint, "verification successful");
    } else {
        warn!(@yellow, "name mismatch in verification");
    }
    Ok(verified)
}

/// Decodes a `ByteArray` from the hex felts of a call response.
pub fn decode_name(response: &str) -> Option<String> {
    let felts = HEX_FELT
        .find_iter(response)
        .map(|m| m.as_str().parse::<Felt>())
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    let (name, _) = ByteArray::decode_words(&felts).ok()?;
    Some(name.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::felt::Word;
    use pretty_assertions::assert_eq;

    struct CannedReader(String);

    impl NameReader for CannedReader {
        fn read_name(&self, _contract: &Felt) -> Result<String, VerificationError> {
            Ok(self.0.clone())
        }
    }

    fn encoded_response(name: &str) -> String {
        let felts: Vec<String> = ByteArray::encode(name)
            .to_words()
            .iter()
            .map(Word::felt)
            .map(|felt| felt.to_string())
            .collect();
        format!("command: call\nresponse: [{}]\n", felts.join(", "))
    }

    #[test]
    fn decodes_byte_array_response() {
        let response = encoded_response("ProvableGameToken");
        assert_eq!(decode_name(&response).as_deref(), Some("ProvableGameToken"));
    }

    #[test]
    fn verifies_literal_and_encoded_names() {
        let literal = CannedReader("response: \"ProvableGameToken\"\n".to_owned());
        assert!(verify_deployment(&literal, &Felt::ONE, "ProvableGameToken").unwrap());

        let encoded = CannedReader(encoded_response("PGT"));
        assert!(verify_deployment(&encoded, &Felt::ONE, "PGT").unwrap());
    }

    #[test]
    fn reports_mismatch() {
        let reader = CannedReader("response: [0x0, 0x414243, 0x3]\n".to_owned());
        assert!(!verify_deployment(&reader, &Felt::ONE, "XYZ").unwrap());
        assert_eq!(decode_name(&reader.0).as_deref(), Some("ABC"));
    }

    #[test]
    fn undecodable_response() {
        assert_eq!(decode_name("error: contract not found"), None);
        assert_eq!(decode_name("response: [0x2, 0x0]"), None);
    }

    #[test]
    fn call_command_line() {
        let reader = SncastNameReader::new(SncastConfig::default());
        assert_eq!(
            reader.call_args(&Felt::from(0xabcu64)),
            [
                "--profile",
                "default",
                "call",
                "--contract-address",
                "0xabc",
                "--function",
                "name"
            ]
        );
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Argument list for the Universal Deployer's `deployContract` entrypoint.

use crate::core::{
    calldata::{build_constructor_calldata, ConstructorCalldata, DeploymentParameters},
    felt::{Felt, Word},
};

/// Number of words preceding the constructor calldata.
pub const HEADER_LEN: usize = 4;

/// `deployContract(class_hash, salt, unique, calldata_len, calldata...)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentEnvelope {
    pub class_hash: Felt,
    pub salt: Felt,
    /// Whether the deployment address is salted with the deployer's address.
    pub unique: bool,
    pub calldata: ConstructorCalldata,
}

/// Wraps the token constructor calldata in a deployer envelope.
pub fn build_envelope(
    class_hash: Felt,
    salt: Felt,
    unique: bool,
    params: &DeploymentParameters,
) -> DeploymentEnvelope {
    DeploymentEnvelope {
        class_hash,
        salt,
        unique,
        calldata: build_constructor_calldata(params),
    }
}

impl DeploymentEnvelope {
    pub fn len(&self) -> usize {
        HEADER_LEN + self.calldata.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn to_words(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(self.len());
        words.push(Word::hex(self.class_hash));
        words.push(Word::dec(self.salt));
        words.push(Word::dec(self.unique));
        words.push(Word::count(self.calldata.len()));
        words.extend_from_slice(self.calldata.words());
        words
    }

    /// Rendered words, ready to be passed as positional `--calldata` arguments.
    pub fn to_args(&self) -> Vec<String> {
        self.to_words().iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params() -> DeploymentParameters {
        DeploymentParameters::builder()
            .name("ProvableGameToken")
            .symbol("PGT")
            .base_uri("https://api.provable.games/token/")
            .royalty_receiver(Felt::from(0x1234u64))
            .royalty_fraction(500u128)
            .game_registry(Felt::from(0x99u64))
            .build()
    }

    #[test]
    fn header_precedes_calldata() {
        let class_hash: Felt = "0x075137b5c45312610d7cb6d43982e5fd5bd0df6c0b1e51518ced64a91f125e85"
            .parse()
            .unwrap();
        let envelope = build_envelope(class_hash, Felt::from(7u64), true, &params());
        let args = envelope.to_args();
        let calldata_len = envelope.calldata.len().to_string();

        assert_eq!(
            &args[..HEADER_LEN],
            [
                "0x75137b5c45312610d7cb6d43982e5fd5bd0df6c0b1e51518ced64a91f125e85",
                "7",
                "1",
                calldata_len.as_str(),
            ]
        );
        assert_eq!(args.len(), envelope.len());
        assert_eq!(
            &envelope.to_words()[HEADER_LEN..],
            envelope.calldata.words()
        );
    }

    #[test]
    fn base_uri_spans_two_words() {
        // 33-byte uri: one full word plus two pending bytes.
        let calldata = build_constructor_calldata(&params());
        let args: Vec<String> = calldata.words().iter().map(ToString::to_string).collect();
        assert_eq!(&args[3..6], ["0", "0x504754", "3"]);
        assert_eq!(args[6], "1");
        assert_eq!(&args[8..10], ["0x6e2f", "2"]);
        assert_eq!(&args[10..], ["0x1234", "500", "0", "0x99", "1"]);
        assert_eq!(calldata.len(), 15);
    }

    #[test]
    fn fourth_header_word_is_calldata_len() {
        for unique in [true, false] {
            let envelope = build_envelope(Felt::ONE, Felt::ZERO, unique, &params());
            let words = envelope.to_words();
            assert_eq!(words[2], Word::dec(unique));
            assert_eq!(
                words[3].felt().to_u64(),
                Some((words.len() - HEADER_LEN) as u64)
            );
        }
    }
}

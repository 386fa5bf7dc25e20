// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Constructor calldata for the token contract.

use typed_builder::TypedBuilder;

use super::{
    byte_array::ByteArray,
    felt::{Felt, Word},
};

/// Royalty fractions are expressed in basis points of this denominator.
pub const ROYALTY_DENOMINATOR: u128 = 10_000;

/// Discriminant of `Option::Some` in the contract's enum layout.
pub const SOME_VARIANT: u64 = 0;

/// Discriminant of `Option::None` in the contract's enum layout.
pub const NONE_VARIANT: u64 = 1;

/// Constructor parameters of the token contract.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct DeploymentParameters {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub royalty_receiver: Felt,
    /// Basis points, `500` is 5%.
    pub royalty_fraction: u128,
    #[builder(default)]
    pub game_registry: Option<Felt>,
    #[builder(default)]
    pub event_relayer: Option<Felt>,
}

impl DeploymentParameters {
    /// Checks constraints the contract would otherwise enforce on-chain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.royalty_fraction > ROYALTY_DENOMINATOR {
            return Err(ValidationError {
                field: "royalty_fraction",
                constraint: format!("at most {ROYALTY_DENOMINATOR} basis points"),
                value: self.royalty_fraction.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid {field}: expected {constraint}, got {value}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: String,
    pub value: String,
}

/// Ordered constructor arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorCalldata {
    words: Vec<Word>,
}

impl ConstructorCalldata {
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words, counted from the assembled payload.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Serializes an optional address: `[0, address]` when present, `[1]` when absent.
pub fn encode_optional(value: Option<Felt>) -> Vec<Word> {
    let mut words = Vec::with_capacity(2);
    write_optional(&mut words, value);
    words
}

fn write_optional(words: &mut Vec<Word>, value: Option<Felt>) {
    match value {
        Some(address) => {
            words.push(Word::dec(SOME_VARIANT));
            words.push(Word::hex(address));
        }
        None => words.push(Word::dec(NONE_VARIANT)),
    }
}

/// Assembles the token constructor arguments in declaration order.
pub fn build_constructor_calldata(params: &DeploymentParameters) -> ConstructorCalldata {
    let mut words = Vec::new();
    for text in [&params.name, &params.symbol, &params.base_uri] {
        ByteArray::encode(text).write_words(&mut words);
    }
    words.push(Word::hex(params.royalty_receiver));
    words.push(Word::dec(params.royalty_fraction));
    write_optional(&mut words, params.game_registry);
    write_optional(&mut words, params.event_relayer);
    ConstructorCalldata { words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECEIVER: &str = "0x127fd5f1fe78a71f8bcd1fec63e3fe2f0486b6ecd5c86a0466c3a21fa5cfcec";
    const REGISTRY: &str = "0x348dafbd271cc82bfc57e3edd3a7b3163008f53c586e31d822862b72e1a663";

    fn params(game_registry: Option<Felt>, event_relayer: Option<Felt>) -> DeploymentParameters {
        DeploymentParameters::builder()
            .name("Token")
            .symbol("TKN")
            .base_uri("")
            .royalty_receiver(RECEIVER.parse::<Felt>().unwrap())
            .royalty_fraction(500u128)
            .game_registry(game_registry)
            .event_relayer(event_relayer)
            .build()
    }

    fn rendered(calldata: &ConstructorCalldata) -> Vec<String> {
        calldata.words().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn full_layout() {
        let registry: Felt = REGISTRY.parse().unwrap();
        let calldata = build_constructor_calldata(&params(Some(registry), None));
        assert_eq!(
            rendered(&calldata),
            vec![
                "0", "0x546f6b656e", "5", // name
                "0", "0x544b4e", "3", // symbol
                "0", "0x0", "0", // base_uri
                RECEIVER, "500", "0", REGISTRY, "1",
            ]
        );
        assert_eq!(calldata.len(), 14);
    }

    #[test]
    fn both_optionals_absent_end_in_two_none_tags() {
        let words = rendered(&build_constructor_calldata(&params(None, None)));
        assert_eq!(&words[words.len() - 3..], ["500", "1", "1"]);
    }

    #[test]
    fn both_optionals_present() {
        let registry = Felt::from(0xabu64);
        let relayer = Felt::from(0xcdu64);
        let words = rendered(&build_constructor_calldata(&params(
            Some(registry),
            Some(relayer),
        )));
        assert_eq!(&words[words.len() - 4..], ["0", "0xab", "0", "0xcd"]);
    }

    #[test]
    fn relayer_only() {
        let words = rendered(&build_constructor_calldata(&params(
            None,
            Some(Felt::from(7u64)),
        )));
        assert_eq!(&words[words.len() - 3..], ["1", "0", "0x7"]);
    }

    #[test]
    fn optional_discriminants() {
        assert_eq!(encode_optional(None), vec![Word::dec(1u64)]);
        assert_eq!(
            encode_optional(Some(Felt::ONE)),
            vec![Word::dec(0u64), Word::hex(Felt::ONE)]
        );
    }

    #[test]
    fn length_matches_word_count_across_boundaries() {
        let optionals = [None, Some(Felt::from(0x42u64))];
        for text_len in [0, 30, 31, 32, 62] {
            let text = "z".repeat(text_len);
            for game_registry in optionals {
                for event_relayer in optionals {
                    let mut p = params(game_registry, event_relayer);
                    p.name = text.clone();
                    p.symbol = text.clone();
                    p.base_uri = text.clone();
                    let calldata = build_constructor_calldata(&p);

                    let text_words = 3 * (text_len / 31 + 3);
                    let optional_words = [game_registry, event_relayer]
                        .iter()
                        .map(|o| if o.is_some() { 2 } else { 1 })
                        .sum::<usize>();
                    assert_eq!(calldata.len(), calldata.words().len());
                    assert_eq!(calldata.len(), text_words + 2 + optional_words);
                }
            }
        }
    }

    #[test]
    fn validation_rejects_excessive_royalty() {
        let mut p = params(None, None);
        assert_eq!(p.validate(), Ok(()));
        p.royalty_fraction = ROYALTY_DENOMINATOR;
        assert_eq!(p.validate(), Ok(()));
        p.royalty_fraction = ROYALTY_DENOMINATOR + 1;
        let err = p.validate().unwrap_err();
        assert_eq!(err.field, "royalty_fraction");
        assert_eq!(err.value, "10001");
        assert_eq!(
            err.to_string(),
            "invalid royalty_fraction: expected at most 10000 basis points, got 10001"
        );
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! `ByteArray` serialization of text arguments.
//!
//! A `ByteArray` is laid out as `[full_word_count, full_words..., pending_word, pending_word_len]`,
//! where each full word packs 31 bytes big-endian and the pending word packs the remaining 0-30
//! bytes. Chunking is byte-oriented, so a multi-byte code point may straddle two words.

use super::felt::{pack, Felt, Word, MAX_PACKED_BYTES};

/// Number of bytes packed into each full word.
pub const BYTES_PER_WORD: usize = MAX_PACKED_BYTES;

/// Encoded form of an arbitrary byte string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteArray {
    full_words: Vec<Felt>,
    pending_word: Felt,
    pending_word_len: usize,
}

/// Encodes `text` into its `ByteArray` representation.
pub fn encode_text(text: &str) -> ByteArray {
    ByteArray::encode(text)
}

impl ByteArray {
    pub fn encode(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let chunks = bytes.chunks_exact(BYTES_PER_WORD);
        let pending = chunks.remainder();
        Self {
            full_words: chunks.map(pack).collect(),
            pending_word: pack(pending),
            pending_word_len: pending.len(),
        }
    }

    pub fn full_words(&self) -> &[Felt] {
        &self.full_words
    }

    pub fn full_word_count(&self) -> usize {
        self.full_words.len()
    }

    pub fn pending_word(&self) -> Felt {
        self.pending_word
    }

    pub fn pending_word_len(&self) -> usize {
        self.pending_word_len
    }

    /// Length of the encoded payload in bytes.
    pub fn byte_len(&self) -> usize {
        self.full_words.len() * BYTES_PER_WORD + self.pending_word_len
    }

    /// Number of words produced by [`ByteArray::to_words`]: always `full_word_count + 3`.
    pub fn serialized_len(&self) -> usize {
        self.full_words.len() + 3
    }

    /// Flattens into calldata words.
    ///
    /// The pending word and its length are emitted even when empty.
    pub fn to_words(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(self.serialized_len());
        self.write_words(&mut words);
        words
    }

    pub(crate) fn write_words(&self, words: &mut Vec<Word>) {
        words.push(Word::count(self.full_words.len()));
        words.extend(self.full_words.iter().copied().map(Word::hex));
        words.push(Word::hex(self.pending_word));
        words.push(Word::count(self.pending_word_len));
    }

    /// Reassembles the original bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        for word in &self.full_words {
            bytes.extend_from_slice(&word.to_be_bytes()[32 - BYTES_PER_WORD..]);
        }
        bytes.extend_from_slice(&self.pending_word.to_be_bytes()[32 - self.pending_word_len..]);
        bytes
    }

    /// Decodes a `ByteArray` from the front of `words`, returning it with the unconsumed tail.
    pub fn decode_words(words: &[Felt]) -> Result<(Self, &[Felt]), ByteArrayError> {
        let (count, rest) = words.split_first().ok_or(ByteArrayError::Truncated {
            expected: 3,
            found: 0,
        })?;
        let count = count
            .to_u64()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);
        let expected = count.saturating_add(3);
        if words.len() < expected {
            return Err(ByteArrayError::Truncated {
                expected,
                found: words.len(),
            });
        }

        let (full_words, rest) = rest.split_at(count);
        if let Some(word) = full_words.iter().find(|w| w.byte_len() > BYTES_PER_WORD) {
            return Err(ByteArrayError::WordTooWide {
                word: *word,
                max_bytes: BYTES_PER_WORD,
            });
        }

        let pending_word = rest[0];
        let pending_word_len = rest[1]
            .to_u64()
            .filter(|len| (*len as usize) < BYTES_PER_WORD)
            .ok_or(ByteArrayError::PendingTooLong(rest[1]))? as usize;
        if pending_word.byte_len() > pending_word_len {
            return Err(ByteArrayError::WordTooWide {
                word: pending_word,
                max_bytes: pending_word_len,
            });
        }

        let decoded = Self {
            full_words: full_words.to_vec(),
            pending_word,
            pending_word_len,
        };
        Ok((decoded, &rest[2..]))
    }

    /// Decodes and interprets the payload as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ByteArrayError {
    #[error("truncated byte array: expected {expected} words, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("pending word length {0} exceeds 30 bytes")]
    PendingTooLong(Felt),
    #[error("word {word} does not fit in {max_bytes} bytes")]
    WordTooWide { word: Felt, max_bytes: usize },
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Field elements and their textual calldata form.
//!
//! Every argument handed to the Universal Deployer is a field element of the STARK prime field.
//! [`Felt`] enforces that bound at construction so that no value is ever silently reduced, and
//! [`Word`] pairs a [`Felt`] with the radix it is rendered in.

use std::{fmt, str::FromStr};

use alloy_primitives::U256;

/// The STARK field prime, `2^251 + 17 * 2^192 + 1`.
pub const FIELD_PRIME: U256 = U256::from_limbs([1, 0, 0, 0x0800_0000_0000_0011]);

/// Maximum number of bytes that can be packed into a single field element.
pub const MAX_PACKED_BYTES: usize = 31;

/// Maximum number of hex digits accepted when parsing a felt.
const MAX_HEX_DIGITS: usize = 64;

/// Transaction hashes are plain field elements.
pub type TxHash = Felt;

/// A field element, guaranteed to be strictly below [`FIELD_PRIME`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Felt(U256);

impl Felt {
    pub const ZERO: Self = Self(U256::ZERO);
    pub const ONE: Self = Self(U256::from_limbs([1, 0, 0, 0]));

    /// Creates a felt, rejecting values outside the field.
    pub fn new(value: U256) -> Result<Self, FeltError> {
        if value >= FIELD_PRIME {
            return Err(FeltError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Packs up to [`MAX_PACKED_BYTES`] big-endian bytes into a felt.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, FeltError> {
        if bytes.len() > MAX_PACKED_BYTES {
            return Err(FeltError::TooManyBytes(bytes.len()));
        }
        Ok(pack(bytes))
    }

    pub fn value(&self) -> U256 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Number of significant bytes in the big-endian representation.
    pub fn byte_len(&self) -> usize {
        self.0.bit_len().div_ceil(8)
    }

    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }
}

/// Packs a chunk already known to hold at most [`MAX_PACKED_BYTES`] bytes.
pub(crate) fn pack(chunk: &[u8]) -> Felt {
    debug_assert!(chunk.len() <= MAX_PACKED_BYTES);
    Felt(U256::from_be_slice(chunk))
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for Felt {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<bool> for Felt {
    fn from(value: bool) -> Self {
        if value {
            Self::ONE
        } else {
            Self::ZERO
        }
    }
}

impl FromStr for Felt {
    type Err = FeltError;

    /// Parses `0x`-prefixed hex or plain decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(digits) => {
                if digits.is_empty()
                    || digits.len() > MAX_HEX_DIGITS
                    || !digits.bytes().all(|b| b.is_ascii_hexdigit())
                {
                    return Err(FeltError::InvalidHex(s.to_owned()));
                }
                U256::from_str_radix(digits, 16).map_err(|_| FeltError::InvalidHex(s.to_owned()))?
            }
            None => {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(FeltError::InvalidDecimal(s.to_owned()));
                }
                U256::from_str_radix(s, 10).map_err(|_| FeltError::InvalidDecimal(s.to_owned()))?
            }
        };
        Self::new(value)
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FeltError {
    #[error("value {0:#x} is not below the field prime")]
    OutOfRange(U256),
    #[error("cannot pack {0} bytes into a single felt (max 31)")]
    TooManyBytes(usize),
    #[error("invalid hex felt: {0:?}")]
    InvalidHex(String),
    #[error("invalid decimal felt: {0:?}")]
    InvalidDecimal(String),
}

/// How a [`Word`] is written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Hex,
}

/// A single calldata word: a felt together with its rendering.
///
/// Counts, lengths and flags are written in decimal. Packed data, addresses and hashes are written
/// as `0x`-prefixed lowercase hex without leading zeros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    felt: Felt,
    radix: Radix,
}

impl Word {
    pub fn dec(felt: impl Into<Felt>) -> Self {
        Self {
            felt: felt.into(),
            radix: Radix::Decimal,
        }
    }

    pub fn hex(felt: impl Into<Felt>) -> Self {
        Self {
            felt: felt.into(),
            radix: Radix::Hex,
        }
    }

    /// A decimal length or count.
    pub fn count(n: usize) -> Self {
        Self::dec(n as u64)
    }

    pub fn felt(&self) -> Felt {
        self.felt
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.radix {
            Radix::Decimal => write!(f, "{}", self.felt.value()),
            Radix::Hex => write!(f, "{}", self.felt),
        }
    }
}

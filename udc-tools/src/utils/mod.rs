// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use crate::core::calldata::ROYALTY_DENOMINATOR;

pub mod color;
pub mod sys;

/// Pretty-prints a royalty fraction given in basis points, e.g. `500 (5%)`.
pub fn format_royalty(basis_points: u128) -> String {
    let percent = basis_points as f64 * 100.0 / ROYALTY_DENOMINATOR as f64;
    format!("{basis_points} ({percent}%)")
}

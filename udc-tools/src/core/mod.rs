// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod byte_array;
pub mod calldata;
pub mod deployment;
pub mod felt;
pub mod message;
pub mod verification;

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying Cairo token contracts through the Universal Deployer Contract.
//!
//! The [`core`] encoders are pure: [`core::byte_array`] serializes text arguments,
//! [`core::calldata`] assembles the constructor calldata and [`core::deployment`] wraps it in the
//! UDC envelope. Submission and receipt lookup go through external `sncast` and `starkli`
//! processes.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{CommandError, CommandFailure, Error, Result};

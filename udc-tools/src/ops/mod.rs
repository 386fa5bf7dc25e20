// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use calldata::{write_calldata, write_encoded_text};
pub use record::write_deployment_record;

mod calldata;
mod record;

/// How generated calldata is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Space separated words on a single line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

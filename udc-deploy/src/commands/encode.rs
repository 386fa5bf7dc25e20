// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use udc_tools::ops::{self, OutputFormat};

use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// The string to encode.
    text: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub fn exec(args: Args) -> CliResult {
    ops::write_encoded_text(&args.text, args.format, io::stdout().lock())?;
    Ok(())
}

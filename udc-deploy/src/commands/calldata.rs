// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use eyre::Context;
use udc_tools::{
    ops::{self, OutputFormat},
    utils::sys,
};

use crate::{
    common_args::{TokenArgs, UdcArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// File to write the calldata to.
    /// (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    #[command(flatten)]
    token: TokenArgs,
    #[command(flatten)]
    udc: UdcArgs,
}

pub fn exec(args: Args) -> CliResult {
    let params = args.token.params();
    // Reject bad parameters before an existing output file is truncated.
    params.validate().map_err(udc_tools::Error::from)?;
    let writer =
        sys::file_or_stdout(args.output.as_ref()).wrap_err("failed to create output file")?;
    ops::write_calldata(&args.udc.config(), &params, args.format, writer)?;
    Ok(())
}

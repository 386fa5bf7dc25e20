// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::eyre;
use udc_tools::core::{
    felt::Felt,
    verification::{verify_deployment, SncastNameReader},
};

use crate::{common_args::SncastArgs, constants::DEFAULT_NAME, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Address of the deployed token.
    #[arg(long)]
    address: Felt,
    /// Name the token is expected to report.
    #[arg(long, default_value = DEFAULT_NAME)]
    expected_name: String,

    #[command(flatten)]
    sncast: SncastArgs,
}

pub fn exec(args: Args) -> CliResult {
    let reader = SncastNameReader::new(args.sncast.config());
    if !verify_deployment(&reader, &args.address, &args.expected_name)? {
        return Err(eyre!(
            "contract at {} does not report name {:?}",
            args.address,
            args.expected_name
        )
        .into());
    }
    Ok(())
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod calldata;
mod deploy;
mod encode;
mod verify;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the UDC deployContract calldata without submitting it
    #[clap(visible_alias = "c")]
    Calldata(calldata::Args),
    /// Deploy a token contract through the UDC
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Print the ByteArray encoding of a string
    #[clap(visible_alias = "e")]
    Encode(encode::Args),
    /// Check that a deployed token reports the expected name
    Verify(verify::Args),
}

pub fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Calldata(args) => calldata::exec(args),
        Command::Deploy(args) => deploy::exec(args),
        Command::Encode(args) => encode::exec(args),
        Command::Verify(args) => verify::exec(args),
    }
}

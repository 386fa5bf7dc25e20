// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use eyre::{eyre, Context};
use udc_tools::{
    core::{
        calldata::DeploymentParameters,
        deployment::{
            self, sncast::SncastSubmitter, starkli::StarkliReceipts, starkli::RPC_ENV, Deployment,
        },
        felt::Felt,
        verification::{verify_deployment, SncastNameReader},
    },
    ops,
    utils::{format_royalty, sys},
};

use crate::{
    common_args::{ReceiptArgs, SncastArgs, TokenArgs, UdcArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Skip reading back the token name after deployment.
    #[arg(long)]
    no_verify: bool,
    /// File to write the deployment details to once the address is known.
    #[arg(long)]
    record: Option<PathBuf>,

    #[command(flatten)]
    token: TokenArgs,
    #[command(flatten)]
    udc: UdcArgs,
    #[command(flatten)]
    sncast: SncastArgs,
    #[command(flatten)]
    receipt: ReceiptArgs,
}

pub fn exec(args: Args) -> CliResult {
    let params = args.token.params();
    print_parameters(&params);

    let sncast = args.sncast.config();
    if !sys::command_exists(&sncast.binary) {
        return Err(eyre!(
            "{} not found, install Starknet Foundry or pass --sncast",
            sncast.binary.display()
        )
        .into());
    }
    let udc = args.udc.config();
    let deployment = deployment::deploy(
        &udc,
        &params,
        &SncastSubmitter::new(sncast.clone()),
        &StarkliReceipts::new(args.receipt.config(udc.udc_address)),
    )?;

    let Some(address) = deployment.address else {
        print_receipt_instructions(&deployment, &args.receipt.rpc_url);
        return Ok(());
    };
    println!("contract deployed at {address}");

    if !args.no_verify {
        // The transaction has landed; a failed read-back is only reported.
        if let Err(err) = verify_deployment(&SncastNameReader::new(sncast), &address, &params.name)
        {
            log::warn!("could not verify deployment: {err}");
        }
    }

    if let Some(path) = &args.record {
        let file = fs::File::create(path).wrap_err("failed to create deployment record")?;
        ops::write_deployment_record(&address, &deployment, &params, file)?;
        println!("deployment details saved to {}", path.display());
    }
    Ok(())
}

fn print_parameters(params: &DeploymentParameters) {
    let optional =
        |address: Option<Felt>| address.map_or_else(|| "none".to_owned(), |a| a.to_string());
    println!("token parameters:");
    println!("  name: {}", params.name);
    println!("  symbol: {}", params.symbol);
    println!("  base uri: {}", params.base_uri);
    println!("  royalty receiver: {}", params.royalty_receiver);
    println!("  royalty fraction: {}", format_royalty(params.royalty_fraction));
    println!("  game registry: {}", optional(params.game_registry));
    println!("  event relayer: {}", optional(params.event_relayer));
}

fn print_receipt_instructions(deployment: &Deployment, rpc_url: &str) {
    eprintln!("could not determine the deployed address automatically");
    eprintln!("to look it up manually, run:");
    eprintln!("  export {RPC_ENV}={rpc_url}");
    eprintln!("  starkli transaction-receipt {}", deployment.tx_hash);
    eprintln!("the contract address is the first data field of the first event");
}

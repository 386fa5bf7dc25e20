// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use crate::core::{calldata::DeploymentParameters, deployment::Deployment, felt::Felt};

/// Writes a plain-text summary of a resolved deployment.
pub fn write_deployment_record(
    address: &Felt,
    deployment: &Deployment,
    params: &DeploymentParameters,
    mut output: impl io::Write,
) -> io::Result<()> {
    writeln!(output, "Contract Address: {address}")?;
    writeln!(output, "Transaction Hash: {}", deployment.tx_hash)?;
    writeln!(output, "Class Hash: {}", deployment.envelope.class_hash)?;
    writeln!(output, "Name: {}", params.name)?;
    writeln!(output, "Symbol: {}", params.symbol)?;
    Ok(())
}

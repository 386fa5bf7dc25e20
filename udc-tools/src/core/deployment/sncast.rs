// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Envelope submission through `sncast invoke`.

use std::path::PathBuf;

use super::{DeploymentEnvelope, DeploymentError, Submitter, DEPLOY_FUNCTION};
use crate::{
    core::{
        felt::{Felt, TxHash},
        message::ProcessOutput,
    },
    error::CommandError,
    utils::sys,
};

/// Output labels that precede the transaction hash, across sncast versions.
const TX_HASH_LABELS: &[&str] = &["Transaction Hash:", "transaction_hash:"];

/// How to invoke `sncast`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SncastConfig {
    pub binary: PathBuf,
    /// Profile from `snfoundry.toml` holding the account details.
    pub profile: String,
    /// Directory containing `snfoundry.toml`.
    pub working_dir: Option<PathBuf>,
}

impl Default for SncastConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("sncast"),
            profile: "default".to_owned(),
            working_dir: None,
        }
    }
}

impl SncastConfig {
    /// Common leading arguments: `--profile <profile>`.
    pub(crate) fn profile_args(&self) -> Vec<String> {
        vec!["--profile".to_owned(), self.profile.clone()]
    }

    pub(crate) fn run(&self, args: &[String]) -> Result<ProcessOutput, CommandError> {
        debug!(@grey, "running {} {}", self.binary.display(), args.join(" "));
        sys::run(&self.binary, args, self.working_dir.as_deref(), &[])
    }
}

/// Submits deployment envelopes with `sncast invoke`.
#[derive(Clone, Debug, Default)]
pub struct SncastSubmitter {
    config: SncastConfig,
}

impl SncastSubmitter {
    pub fn new(config: SncastConfig) -> Self {
        Self { config }
    }

    pub fn invoke_args(&self, udc_address: &Felt, envelope: &DeploymentEnvelope) -> Vec<String> {
        let udc_address = udc_address.to_string();
        let mut args = self.config.profile_args();
        args.extend(
            [
                "invoke",
                "--contract-address",
                udc_address.as_str(),
                "--function",
                DEPLOY_FUNCTION,
                "--calldata",
            ]
            .map(str::to_owned),
        );
        args.extend(envelope.to_args());
        args
    }
}

impl Submitter for SncastSubmitter {
    fn submit(
        &self,
        udc_address: &Felt,
        envelope: &DeploymentEnvelope,
    ) -> Result<TxHash, DeploymentError> {
        let output = self.config.run(&self.invoke_args(udc_address, envelope))?;
        greyln!("{}", output.stdout.trim_end());

        let tx_hash = extract_tx_hash(&output.stdout).ok_or_else(|| {
            DeploymentError::MissingTxHash {
                stdout: output.stdout.clone(),
                stderr: output.stderr.clone(),
            }
        })?;
        Ok(tx_hash.parse()?)
    }
}

/// Finds the transaction hash in sncast's human-readable output.
pub fn extract_tx_hash(stdout: &str) -> Option<&str> {
    stdout.lines().find_map(|line| {
        TX_HASH_LABELS
            .iter()
            .find_map(|label| line.split_once(label))
            .map(|(_, rest)| rest.trim())
            .filter(|hash| !hash.is_empty())
    })
}

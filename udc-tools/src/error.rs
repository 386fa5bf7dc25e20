// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::message::ProcessOutput;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Felt(#[from] crate::core::felt::FeltError),
    #[error("{0}")]
    Validation(#[from] crate::core::calldata::ValidationError),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    CommandFailure(#[from] CommandFailure),
}

#[derive(Debug, thiserror::Error)]
#[error(
    "{} failed (exit code: {:?}): {}",
    .0.process_name,
    .0.exit_code,
    .0.stderr.trim(),
)]
pub struct CommandFailure(pub ProcessOutput);

impl CommandFailure {
    /// Returns the captured output if the process succeeded.
    pub fn check(
        process_name: impl Into<String>,
        output: std::process::Output,
    ) -> Result<ProcessOutput, Self> {
        let process_output = ProcessOutput::new(process_name, &output);
        if output.status.success() {
            Ok(process_output)
        } else {
            Err(CommandFailure(process_output))
        }
    }
}

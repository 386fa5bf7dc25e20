// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    ffi::OsStr,
    fs, io,
    path::Path,
    process::{Command, Stdio},
};

use crate::{
    core::message::ProcessOutput,
    error::{CommandError, CommandFailure},
};

pub fn command_exists(program: impl AsRef<OsStr>) -> bool {
    Command::new(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .arg("--version")
        .output()
        .map(|x| x.status.success())
        .unwrap_or_default()
}

/// Runs an external tool to completion, capturing its output.
///
/// The child gets its own working directory and extra environment; the parent's are untouched.
pub fn run<I, S>(
    program: &Path,
    args: I,
    working_dir: Option<&Path>,
    envs: &[(&str, &str)],
) -> Result<ProcessOutput, CommandError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }
    for (key, value) in envs {
        cmd.env(key, value);
    }
    let output = cmd.output().map_err(|source| CommandError::Io {
        program: program.display().to_string(),
        source,
    })?;
    Ok(CommandFailure::check(program.display().to_string(), output)?)
}

/// Opens a file for writing, or stdout.
pub fn file_or_stdout(path: Option<impl AsRef<Path>>) -> io::Result<Box<dyn io::Write>> {
    Ok(match path {
        Some(file) => Box::new(fs::File::create(file)?),
        None => Box::new(io::stdout().lock()),
    })
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::process::Output;

use serde::{Deserialize, Serialize};

use crate::utils::color::strip_color;

/// Captured output of an external tool invocation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProcessOutput {
    pub process_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Decodes both streams lossily and strips ANSI color codes.
    pub fn new(process_name: impl Into<String>, output: &Output) -> Self {
        Self {
            process_name: process_name.into(),
            stdout: strip_color(String::from_utf8_lossy(&output.stdout)),
            stderr: strip_color(String::from_utf8_lossy(&output.stderr)),
            exit_code: output.status.code(),
        }
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use serde::Serialize;

use super::OutputFormat;
use crate::{
    core::{
        byte_array::encode_text,
        calldata::DeploymentParameters,
        deployment::{build_envelope, DeploymentConfig, DEPLOY_FUNCTION},
        felt::Word,
    },
    Result,
};

#[derive(Debug, Serialize)]
struct InvokeCalldata<'a> {
    contract_address: String,
    function: &'a str,
    calldata_len: usize,
    calldata: Vec<String>,
}

#[derive(Debug, Serialize)]
struct EncodedText<'a> {
    text: &'a str,
    byte_len: usize,
    words: Vec<String>,
}

/// Writes the UDC `deployContract` calldata for `params` without submitting it.
pub fn write_calldata(
    config: &DeploymentConfig,
    params: &DeploymentParameters,
    format: OutputFormat,
    mut output: impl io::Write,
) -> Result<()> {
    params.validate()?;
    let envelope = build_envelope(config.class_hash, config.salt, config.unique, params);
    let args = envelope.to_args();
    match format {
        OutputFormat::Text => writeln!(output, "{}", args.join(" "))?,
        OutputFormat::Json => {
            let calldata = InvokeCalldata {
                contract_address: config.udc_address.to_string(),
                function: DEPLOY_FUNCTION,
                calldata_len: args.len(),
                calldata: args,
            };
            serde_json::to_writer_pretty(&mut output, &calldata)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

/// Writes the `ByteArray` words of a single string.
pub fn write_encoded_text(
    text: &str,
    format: OutputFormat,
    mut output: impl io::Write,
) -> Result<()> {
    let encoded = encode_text(text);
    let words: Vec<String> = encoded.to_words().iter().map(Word::to_string).collect();
    match format {
        OutputFormat::Text => writeln!(output, "{}", words.join(" "))?,
        OutputFormat::Json => {
            let encoded = EncodedText {
                text,
                byte_len: encoded.byte_len(),
                words,
            };
            serde_json::to_writer_pretty(&mut output, &encoded)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

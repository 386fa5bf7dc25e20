// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployed-address lookup through `starkli transaction-receipt`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{DeploymentError, ReceiptSource};
use crate::{
    core::felt::{Felt, TxHash},
    utils::sys,
};

/// Environment variable starkli reads its RPC endpoint from.
pub const RPC_ENV: &str = "STARKNET_RPC";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarkliConfig {
    /// Candidate binaries, tried in order until one produces a receipt.
    pub binaries: Vec<PathBuf>,
    pub rpc_url: Option<String>,
    /// Expected emitter of the deployment event.
    pub udc_address: Option<Felt>,
}

impl Default for StarkliConfig {
    fn default() -> Self {
        Self {
            binaries: vec![PathBuf::from("starkli")],
            rpc_url: None,
            udc_address: None,
        }
    }
}

/// The parts of a transaction receipt needed to locate the deployed address.
#[derive(Debug, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub events: Vec<ReceiptEvent>,
}

#[derive(Debug, Deserialize)]
pub struct ReceiptEvent {
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub data: Vec<String>,
}

impl ReceiptEvent {
    /// Whether the event was emitted by `address`. Events without a parseable emitter match.
    pub fn is_from(&self, address: &Felt) -> bool {
        match self.from_address.as_deref().map(str::parse::<Felt>) {
            Some(Ok(emitter)) => emitter == *address,
            _ => true,
        }
    }
}

/// The UDC's `ContractDeployed` event is the first event of the receipt, and the deployed address
/// is its first data field.
pub fn address_from_receipt(
    receipt: &Receipt,
    udc_address: Option<&Felt>,
) -> Result<Felt, DeploymentError> {
    let event = receipt
        .events
        .first()
        .ok_or_else(|| DeploymentError::NoContractAddress("receipt has no events".to_owned()))?;
    if let Some(udc) = udc_address.filter(|udc| !event.is_from(udc)) {
        warn!(
            @yellow,
            "first receipt event was not emitted by the UDC at {}",
            udc
        );
    }
    let address = event.data.first().ok_or_else(|| {
        DeploymentError::NoContractAddress("ContractDeployed event has no data".to_owned())
    })?;
    Ok(address.parse()?)
}

/// Reads receipts with `starkli`.
#[derive(Clone, Debug, Default)]
pub struct StarkliReceipts {
    config: StarkliConfig,
}

impl StarkliReceipts {
    pub fn new(config: StarkliConfig) -> Self {
        Self { config }
    }

    fn fetch_receipt(&self, binary: &Path, tx_hash: &TxHash) -> Result<Receipt, DeploymentError> {
        let envs: Vec<(&str, &str)> = self
            .config
            .rpc_url
            .as_deref()
            .map(|url| (RPC_ENV, url))
            .into_iter()
            .collect();
        let output = sys::run(
            binary,
            ["transaction-receipt".to_owned(), tx_hash.to_string()],
            None,
            &envs,
        )?;
        Ok(serde_json::from_str(&output.stdout)?)
    }
}

impl ReceiptSource for StarkliReceipts {
    fn fetch_deployed_address(&self, tx_hash: &TxHash) -> Result<Felt, DeploymentError> {
        greyln!("fetching transaction receipt...");
        for binary in &self.config.binaries {
            match self.fetch_receipt(binary, tx_hash) {
                Ok(receipt) => {
                    return address_from_receipt(&receipt, self.config.udc_address.as_ref())
                }
                Err(err) => {
                    debug!(@grey, "{} could not fetch receipt: {}", binary.display(), err);
                }
            }
        }
        Err(DeploymentError::NoContractAddress(format!(
            "no starkli binary could fetch the receipt (tried {})",
            self.config
                .binaries
                .iter()
                .map(|b| b.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_address_from_first_event() {
        let receipt: Receipt = serde_json::from_str(
            r#"{
                "transaction_hash": "0x1",
                "events": [
                    {
                        "from_address": "0x41a78e741e5af2fec34b695679bc6891742439f7afb8484ecd7766661ad02bf",
                        "keys": ["0x26b160f10156dea0639bec90696772c640b9706a47f5b8c52ea1abe5858b34d"],
                        "data": ["0x0123", "0x5", "0x0"]
                    },
                    { "data": ["0x999"] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(address_from_receipt(&receipt, None).unwrap(), Felt::from(0x123u64));
    }

    #[test]
    fn event_emitter_is_compared_as_felt() {
        let receipt: Receipt = serde_json::from_str(
            r#"{ "events": [{ "from_address": "0x0041", "data": ["0x5"] }, { "data": [] }] }"#,
        )
        .unwrap();
        assert!(receipt.events[0].is_from(&Felt::from(0x41u64)));
        assert!(!receipt.events[0].is_from(&Felt::from(0x42u64)));
        assert!(receipt.events[1].is_from(&Felt::from(0x42u64)));
        // A foreign emitter is reported, not rejected.
        assert_eq!(
            address_from_receipt(&receipt, Some(&Felt::from(0x42u64))).unwrap(),
            Felt::from(5u64)
        );
    }

    #[test]
    fn empty_receipts_have_no_address() {
        let receipt: Receipt = serde_json::from_str(r#"{ "events": [] }"#).unwrap();
        assert!(matches!(
            address_from_receipt(&receipt, None),
            Err(DeploymentError::NoContractAddress(_))
        ));

        let receipt: Receipt = serde_json::from_str(r#"{ "events": [{ "data": [] }] }"#).unwrap();
        assert!(matches!(
            address_from_receipt(&receipt, None),
            Err(DeploymentError::NoContractAddress(_))
        ));
    }

    #[test]
    fn malformed_address_is_rejected() {
        let receipt: Receipt =
            serde_json::from_str(r#"{ "events": [{ "data": ["not-a-felt"] }] }"#).unwrap();
        assert!(matches!(
            address_from_receipt(&receipt, None),
            Err(DeploymentError::Felt(_))
        ));
    }

    #[test]
    fn falls_through_all_missing_binaries() {
        let receipts = StarkliReceipts::new(StarkliConfig {
            binaries: vec![
                PathBuf::from("/nonexistent/starkli"),
                PathBuf::from("definitely-not-starkli"),
            ],
            rpc_url: Some("http://localhost:5050".to_owned()),
            udc_address: None,
        });
        let err = receipts.fetch_deployed_address(&Felt::ONE).unwrap_err();
        let DeploymentError::NoContractAddress(msg) = err else {
            panic!("expected missing address");
        };
        assert!(msg.contains("/nonexistent/starkli, definitely-not-starkli"));
    }

    #[cfg(unix)]
    #[test]
    fn uses_first_working_binary() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-starkli");
        std::fs::write(
            &script,
            "#!/bin/sh\necho '{\"events\":[{\"data\":[\"'\"$STARKNET_RPC\"'\"]}]}'\n",
        )
        .unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let receipts = StarkliReceipts::new(StarkliConfig {
            binaries: vec![PathBuf::from("definitely-not-starkli"), script],
            rpc_url: Some("0x77".to_owned()),
            udc_address: Some(Felt::from(0x41u64)),
        });
        assert_eq!(
            receipts.fetch_deployed_address(&Felt::ONE).unwrap(),
            Felt::from(0x77u64)
        );
    }
}

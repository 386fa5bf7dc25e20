// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Token deployment through the Universal Deployer Contract (UDC).
//!
//! Building the envelope is pure; submitting it and resolving the deployed address are delegated
//! to a [`Submitter`] and a [`ReceiptSource`].

use crate::{
    core::{
        calldata::{DeploymentParameters, ValidationError},
        felt::{Felt, FeltError, TxHash},
    },
    error::CommandError,
    utils::format_royalty,
};

pub use envelope::{build_envelope, DeploymentEnvelope, HEADER_LEN};

pub mod envelope;
pub mod sncast;
pub mod starkli;

/// UDC entrypoint that deploys a class with constructor calldata.
pub const DEPLOY_FUNCTION: &str = "deployContract";

/// Where and what to deploy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub udc_address: Felt,
    pub class_hash: Felt,
    pub salt: Felt,
    pub unique: bool,
}

/// Submits an envelope to the UDC.
pub trait Submitter {
    fn submit(
        &self,
        udc_address: &Felt,
        envelope: &DeploymentEnvelope,
    ) -> Result<TxHash, DeploymentError>;
}

/// Resolves the address emitted by the UDC for a deployment transaction.
pub trait ReceiptSource {
    fn fetch_deployed_address(&self, tx_hash: &TxHash) -> Result<Felt, DeploymentError>;
}

/// Outcome of a submitted deployment.
#[derive(Debug)]
pub struct Deployment {
    pub tx_hash: TxHash,
    /// `None` when the receipt could not be resolved.
    pub address: Option<Felt>,
    pub envelope: DeploymentEnvelope,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Command(#[from] CommandError),
    #[error("{0}")]
    Felt(#[from] FeltError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not find transaction hash in output\n--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}")]
    MissingTxHash { stdout: String, stderr: String },
    #[error("missing address: {0}")]
    NoContractAddress(String),
}

/// Builds the UDC envelope for `params` and submits it.
///
/// A failure to resolve the deployed address is logged but not fatal: the transaction has
/// already been sent at that point.
pub fn deploy(
    config: &DeploymentConfig,
    params: &DeploymentParameters,
    submitter: &impl Submitter,
    receipts: &impl ReceiptSource,
) -> Result<Deployment, DeploymentError> {
    params.validate()?;
    let envelope = build_envelope(config.class_hash, config.salt, config.unique, params);

    greyln!("deploying contract...");
    greyln!("  class hash: {}", config.class_hash);
    greyln!("  constructor args: {} parameters", envelope.calldata.len());
    greyln!("  udc address: {}", config.udc_address);
    greyln!("  salt: {}", config.salt.value());
    greyln!("  unique: {}", config.unique);
    greyln!("  royalty: {}", format_royalty(params.royalty_fraction));
    debug!(@grey, "udc calldata: {}", envelope.to_args().join(" "));

    let tx_hash = submitter.submit(&config.udc_address, &envelope)?;
    info!(@grey, "deployment tx hash: {}", tx_hash.lavender());

    let address = match receipts.fetch_deployed_address(&tx_hash) {
        Ok(address) => {
            info!(@grey, "deployed code at address: {}", address.lavender());
            Some(address)
        }
        Err(err) => {
            warn!(@yellow, "could not extract contract address: {}", err);
            None
        }
    };

    Ok(Deployment {
        tx_hash,
        address,
        envelope,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingSubmitter {
        submitted: RefCell<Vec<(Felt, Vec<String>)>>,
    }

    impl Submitter for RecordingSubmitter {
        fn submit(
            &self,
            udc_address: &Felt,
            envelope: &DeploymentEnvelope,
        ) -> Result<TxHash, DeploymentError> {
            self.submitted
                .borrow_mut()
                .push((*udc_address, envelope.to_args()));
            Ok(Felt::from(0xbeefu64))
        }
    }

    struct FixedReceipts(Option<Felt>);

    impl ReceiptSource for FixedReceipts {
        fn fetch_deployed_address(&self, tx_hash: &TxHash) -> Result<Felt, DeploymentError> {
            assert_eq!(*tx_hash, Felt::from(0xbeefu64));
            self.0
                .ok_or_else(|| DeploymentError::NoContractAddress("no events".to_owned()))
        }
    }

    fn config() -> DeploymentConfig {
        DeploymentConfig {
            udc_address: Felt::from(0x41u64),
            class_hash: Felt::from(0xc1u64),
            salt: Felt::ZERO,
            unique: true,
        }
    }

    fn params(royalty_fraction: u128) -> DeploymentParameters {
        DeploymentParameters::builder()
            .name("T")
            .symbol("T")
            .base_uri("")
            .royalty_receiver(Felt::ONE)
            .royalty_fraction(royalty_fraction)
            .build()
    }

    #[test]
    fn submits_envelope_and_resolves_address() {
        let submitter = RecordingSubmitter::default();
        let deployment = deploy(
            &config(),
            &params(500),
            &submitter,
            &FixedReceipts(Some(Felt::from(0xaddu64))),
        )
        .unwrap();

        assert_eq!(deployment.tx_hash, Felt::from(0xbeefu64));
        assert_eq!(deployment.address, Some(Felt::from(0xaddu64)));

        let submitted = submitter.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        let (udc, args) = &submitted[0];
        assert_eq!(*udc, Felt::from(0x41u64));
        assert_eq!(&args[..4], ["0xc1", "0", "1", "13"]);
        assert_eq!(args, &deployment.envelope.to_args());
    }

    #[test]
    fn missing_address_is_not_fatal() {
        let deployment = deploy(
            &config(),
            &params(500),
            &RecordingSubmitter::default(),
            &FixedReceipts(None),
        )
        .unwrap();
        assert_eq!(deployment.address, None);
    }

    #[test]
    fn invalid_parameters_are_never_submitted() {
        let submitter = RecordingSubmitter::default();
        let err = deploy(
            &config(),
            &params(20_000),
            &submitter,
            &FixedReceipts(None),
        )
        .unwrap_err();
        assert!(matches!(err, DeploymentError::Validation(_)));
        assert!(submitter.submitted.borrow().is_empty());
    }
}

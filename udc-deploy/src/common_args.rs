// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, str::FromStr};

use udc_tools::core::{
    calldata::DeploymentParameters,
    deployment::{sncast::SncastConfig, starkli::StarkliConfig, DeploymentConfig},
    felt::{Felt, FeltError},
};

use crate::constants::{
    DEFAULT_BASE_URI, DEFAULT_CLASS_HASH, DEFAULT_GAME_REGISTRY, DEFAULT_NAME, DEFAULT_PROFILE,
    DEFAULT_ROYALTY_FRACTION, DEFAULT_ROYALTY_RECEIVER, DEFAULT_RPC_URL, DEFAULT_SNCAST,
    DEFAULT_STARKLI_PATHS, DEFAULT_SYMBOL, DEFAULT_UDC_ADDRESS,
};

/// An address argument that may be switched off with an empty string or `none`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionalAddress(pub Option<Felt>);

impl FromStr for OptionalAddress {
    type Err = FeltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" | "None" => Ok(Self(None)),
            address => address.parse().map(|felt| Self(Some(felt))),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct TokenArgs {
    /// Token name
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,
    /// Token symbol
    #[arg(long, default_value = DEFAULT_SYMBOL)]
    pub symbol: String,
    /// Base URI for token metadata
    #[arg(long, default_value = DEFAULT_BASE_URI)]
    pub base_uri: String,
    /// Royalty receiver address
    #[arg(long, default_value = DEFAULT_ROYALTY_RECEIVER)]
    pub royalty_receiver: Felt,
    /// Royalty fraction in basis points (500 = 5%)
    #[arg(long, default_value = DEFAULT_ROYALTY_FRACTION)]
    pub royalty_fraction: u128,
    /// Game registry address, or `none`
    #[arg(long, default_value = DEFAULT_GAME_REGISTRY)]
    pub game_registry: OptionalAddress,
    /// Event relayer address, or `none`
    #[arg(long, default_value = "none")]
    pub event_relayer: OptionalAddress,
}

impl TokenArgs {
    pub fn params(&self) -> DeploymentParameters {
        DeploymentParameters::builder()
            .name(self.name.clone())
            .symbol(self.symbol.clone())
            .base_uri(self.base_uri.clone())
            .royalty_receiver(self.royalty_receiver)
            .royalty_fraction(self.royalty_fraction)
            .game_registry(self.game_registry.0)
            .event_relayer(self.event_relayer.0)
            .build()
    }
}

#[derive(Debug, clap::Args)]
pub struct UdcArgs {
    /// Class hash of the declared token contract
    #[arg(long, default_value = DEFAULT_CLASS_HASH)]
    pub class_hash: Felt,
    /// Universal Deployer Contract address
    #[arg(long, default_value = DEFAULT_UDC_ADDRESS)]
    pub udc_address: Felt,
    /// Salt for the deployment address
    #[arg(long, default_value = "0")]
    pub salt: Felt,
    /// Do not make the deployment address unique to the deployer
    #[arg(long)]
    pub no_unique: bool,
}

impl UdcArgs {
    pub fn config(&self) -> DeploymentConfig {
        DeploymentConfig {
            udc_address: self.udc_address,
            class_hash: self.class_hash,
            salt: self.salt,
            unique: !self.no_unique,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct SncastArgs {
    /// sncast profile name from snfoundry.toml
    #[arg(long, default_value = DEFAULT_PROFILE)]
    pub profile: String,
    /// Path to the sncast binary
    #[arg(long, default_value = DEFAULT_SNCAST)]
    pub sncast: PathBuf,
    /// Directory to run sncast in (where snfoundry.toml lives)
    #[arg(long)]
    pub workdir: Option<PathBuf>,
}

impl SncastArgs {
    pub fn config(&self) -> SncastConfig {
        SncastConfig {
            binary: self.sncast.clone(),
            profile: self.profile.clone(),
            working_dir: self.workdir.clone(),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct ReceiptArgs {
    /// RPC endpoint used to fetch the deployment receipt
    #[arg(long, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,
    /// starkli binaries to try, in order
    #[arg(long = "starkli", default_values = DEFAULT_STARKLI_PATHS)]
    pub starkli_paths: Vec<PathBuf>,
}

impl ReceiptArgs {
    pub fn config(&self, udc_address: Felt) -> StarkliConfig {
        StarkliConfig {
            binaries: self.starkli_paths.clone(),
            rpc_url: Some(self.rpc_url.clone()),
            udc_address: Some(udc_address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_address_parsing() {
        assert_eq!("none".parse::<OptionalAddress>(), Ok(OptionalAddress(None)));
        assert_eq!("".parse::<OptionalAddress>(), Ok(OptionalAddress(None)));
        assert_eq!(
            "0x2a".parse::<OptionalAddress>(),
            Ok(OptionalAddress(Some(Felt::from(42u64))))
        );
        assert!("0xnope".parse::<OptionalAddress>().is_err());
    }
}

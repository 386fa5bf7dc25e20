// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Defaults for the provable game token deployment on the Katana devnet.

pub const DEFAULT_NAME: &str = "ProvableGameToken";
pub const DEFAULT_SYMBOL: &str = "PGT";
pub const DEFAULT_BASE_URI: &str = "https://api.provable.games/token/";
pub const DEFAULT_ROYALTY_RECEIVER: &str =
    "0x127fd5f1fe78a71f8bcd1fec63e3fe2f0486b6ecd5c86a0466c3a21fa5cfcec";
/// 5%, in basis points.
pub const DEFAULT_ROYALTY_FRACTION: &str = "500";
pub const DEFAULT_GAME_REGISTRY: &str =
    "0x00348dafbd271cc82bfc57e3edd3a7b3163008f53c586e31d822862b72e1a663";

pub const DEFAULT_CLASS_HASH: &str =
    "0x075137b5c45312610d7cb6d43982e5fd5bd0df6c0b1e51518ced64a91f125e85";
pub const DEFAULT_UDC_ADDRESS: &str =
    "0x041a78e741e5af2fec34b695679bc6891742439f7afb8484ecd7766661ad02bf";

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_SNCAST: &str = "sncast";
pub const DEFAULT_STARKLI_PATHS: [&str; 2] = ["/home/ubuntu/.starkli/bin/starkli", "starkli"];
pub const DEFAULT_RPC_URL: &str = "https://api.cartridge.gg/x/provable-dw/katana";

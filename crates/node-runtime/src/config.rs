//! Runtime configuration loading.
//!
//! The node reads a TOML file describing the initial administrator set, the
//! seed whitelist, and whether to boot in read-only mode:
//!
//! ```toml
//! read_only = false
//! admins = ["0xf17f52151ebef6c7334fad080c5704d77216b732"]
//!
//! [[whitelist]]
//! pubkey_high = "0x9bd359fdc3a2ed5df436c3d8914b1532740128929892092b7fcb320c1b62f375"
//! pubkey_low  = "0x2e1092b7fcb320c1b62f3759bd359fdc3a2ed5df436c3d8914b1532740128929"
//! host        = "0x0000000000000000000011119bd359fd"
//! port        = 30303
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use np_01_node_rules::{Address, EnodeId};

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not read the file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A hex field did not decode to the expected width.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Which field failed.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// One seed whitelist entry as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct EnodeConfig {
    /// Hex-encoded high half of the node public key (32 bytes).
    pub pubkey_high: String,
    /// Hex-encoded low half of the node public key (32 bytes).
    pub pubkey_low: String,
    /// Hex-encoded host address (16 bytes).
    pub host: String,
    /// Listening port.
    pub port: u16,
}

impl EnodeConfig {
    /// Decode into an engine identity.
    pub fn to_enode(&self) -> Result<EnodeId, ConfigError> {
        Ok(EnodeId::new(
            parse_fixed("pubkey_high", &self.pubkey_high)?,
            parse_fixed("pubkey_low", &self.pubkey_low)?,
            parse_fixed("host", &self.host)?,
            self.port,
        ))
    }
}

/// The node's startup configuration.
#[derive(Debug, Default, Deserialize)]
pub struct RuntimeConfig {
    /// Hex-encoded administrator account addresses (20 bytes each).
    #[serde(default)]
    pub admins: Vec<String>,

    /// Enodes whitelisted at boot.
    #[serde(default)]
    pub whitelist: Vec<EnodeConfig>,

    /// Engage the read-only gate immediately after seeding.
    #[serde(default)]
    pub read_only: bool,
}

impl RuntimeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Decode the administrator addresses.
    pub fn admin_addresses(&self) -> Result<Vec<Address>, ConfigError> {
        self.admins
            .iter()
            .map(|raw| parse_fixed::<20>("admin address", raw))
            .collect()
    }

    /// Decode the seed whitelist.
    pub fn whitelist_enodes(&self) -> Result<Vec<EnodeId>, ConfigError> {
        self.whitelist.iter().map(EnodeConfig::to_enode).collect()
    }
}

/// Decode a `0x`-prefixed (or bare) hex string into a fixed-width array.
fn parse_fixed<const N: usize>(field: &'static str, raw: &str) -> Result<[u8; N], ConfigError> {
    let stripped = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(stripped).map_err(|e| ConfigError::InvalidField {
        field,
        reason: e.to_string(),
    })?;
    bytes.try_into().map_err(|_| ConfigError::InvalidField {
        field,
        reason: format!("expected {N} bytes"),
    })
}

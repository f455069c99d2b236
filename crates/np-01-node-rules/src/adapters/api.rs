//! JSON view types for RPC and admin-UI consumption.
//!
//! All byte fields are hex-encoded with a `0x` prefix; field names follow
//! the camelCase convention of the JSON-RPC surface.

use serde::{Deserialize, Serialize};

use crate::domain::{EnodeEntry, EnodeKey};

/// A whitelist entry formatted for JSON responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcEnodeInfo {
    /// The entry's own whitelist key.
    pub key: String,
    /// Key of the successor entry.
    #[serde(rename = "nextKey")]
    pub next_key: String,
    /// Key of the predecessor entry.
    #[serde(rename = "prevKey")]
    pub prev_key: String,
    /// High half of the node public key.
    #[serde(rename = "pubkeyHigh")]
    pub pubkey_high: String,
    /// Low half of the node public key.
    #[serde(rename = "pubkeyLow")]
    pub pubkey_low: String,
    /// Opaque 16-byte host address.
    pub host: String,
    /// Listening port.
    pub port: u16,
}

impl RpcEnodeInfo {
    /// Build the view for an entry under its key.
    pub fn from_entry(key: &EnodeKey, entry: &EnodeEntry) -> Self {
        Self {
            key: key.to_hex(),
            next_key: entry.next.to_hex(),
            prev_key: entry.prev.to_hex(),
            pubkey_high: format!("0x{}", hex::encode(entry.enode.pubkey_high)),
            pubkey_low: format!("0x{}", hex::encode(entry.enode.pubkey_low)),
            host: format!("0x{}", hex::encode(entry.enode.host)),
            port: entry.enode.port,
        }
    }
}

/// Engine status summary for dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRulesStatus {
    /// Number of whitelisted enodes.
    pub size: usize,
    /// Whether the read-only gate is engaged.
    #[serde(rename = "readOnly")]
    pub read_only: bool,
    /// Key of the head entry, absent when the whitelist is empty.
    #[serde(rename = "headKey", skip_serializing_if = "Option::is_none")]
    pub head_key: Option<String>,
}

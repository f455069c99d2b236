//! Enode identity and key derivation.
//!
//! An enode is identified by the tuple (public key high half, public key low
//! half, host, port). The two 32-byte halves together form the node's 512-bit
//! public key. The whitelist never stores identities under the raw tuple; it
//! stores them under the Keccak-256 digest of the packed fields, so lookups
//! and removals are O(1) regardless of list size.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// Account address of a caller (20-byte Ethereum-style).
pub type Address = [u8; 20];

/// 256-bit whitelist key derived from an enode's identity fields.
///
/// Derivation is pure and deterministic: the same identity always maps to the
/// same key, and any change to a single field produces a different key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnodeKey([u8; 32]);

impl EnodeKey {
    /// Create a key from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex representation with `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl AsRef<[u8]> for EnodeKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for EnodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for EnodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnodeKey({})", self.to_hex())
    }
}

/// The identifying tuple of a network peer.
///
/// Two identities are equal iff all four fields are equal. The type is a
/// plain immutable value; the whitelist owns the only stored copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnodeId {
    /// High 32 bytes of the node's 512-bit public key.
    pub pubkey_high: [u8; 32],
    /// Low 32 bytes of the node's 512-bit public key.
    pub pubkey_low: [u8; 32],
    /// Fixed 16-byte opaque address (IPv6-sized).
    pub host: [u8; 16],
    /// Listening port.
    pub port: u16,
}

impl EnodeId {
    /// Create an enode identity.
    pub fn new(pubkey_high: [u8; 32], pubkey_low: [u8; 32], host: [u8; 16], port: u16) -> Self {
        Self {
            pubkey_high,
            pubkey_low,
            host,
            port,
        }
    }

    /// Derive the whitelist key for this identity.
    ///
    /// Keccak-256 over the packed encoding
    /// `pubkey_high ‖ pubkey_low ‖ host ‖ port_be` (82 bytes). The port is
    /// encoded big-endian so the packing is canonical across platforms.
    pub fn compute_key(&self) -> EnodeKey {
        let mut hasher = Keccak256::new();
        hasher.update(self.pubkey_high);
        hasher.update(self.pubkey_low);
        hasher.update(self.host);
        hasher.update(self.port.to_be_bytes());
        EnodeKey(hasher.finalize().into())
    }
}

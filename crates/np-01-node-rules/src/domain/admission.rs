//! Admission and connection queries.
//!
//! Read-only questions answered directly by the whitelist, bypassing the
//! authorization and read-only gates. An empty whitelist permits nothing;
//! there is no implicit allow-all.

use serde::{Deserialize, Serialize};

use crate::domain::enode::EnodeId;
use crate::domain::whitelist::Whitelist;

/// Wire sentinel for a permitted connection: all 256 bits set.
pub const PERMITTED_RESPONSE: [u8; 32] = [0xff; 32];

/// Wire sentinel for a rejected connection: all bits set except the top bit.
pub const NOT_PERMITTED_RESPONSE: [u8; 32] = {
    let mut bytes = [0xff_u8; 32];
    bytes[0] = 0x7f;
    bytes
};

/// Outcome of a connection check between two enodes.
///
/// The low-level admission callback this engine feeds expects a fixed 32-byte
/// response rather than a boolean; `as_bytes32` reproduces that contract
/// bit-exactly. Callers that do not need wire compatibility use
/// `is_permitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionVerdict {
    /// Both endpoints are whitelisted.
    Permitted,
    /// At least one endpoint is not whitelisted.
    NotPermitted,
}

impl ConnectionVerdict {
    /// Build a verdict from a plain boolean decision.
    pub fn from_bool(permitted: bool) -> Self {
        if permitted {
            Self::Permitted
        } else {
            Self::NotPermitted
        }
    }

    /// Plain boolean form.
    pub fn is_permitted(&self) -> bool {
        matches!(self, Self::Permitted)
    }

    /// Fixed-width wire form expected by the admission callback.
    pub fn as_bytes32(&self) -> [u8; 32] {
        match self {
            Self::Permitted => PERMITTED_RESPONSE,
            Self::NotPermitted => NOT_PERMITTED_RESPONSE,
        }
    }
}

impl From<bool> for ConnectionVerdict {
    fn from(permitted: bool) -> Self {
        Self::from_bool(permitted)
    }
}

impl Whitelist {
    /// Whether an enode is currently whitelisted.
    pub fn is_allowed(&self, enode: &EnodeId) -> bool {
        self.contains_key(&enode.compute_key())
    }

    /// Whether two enodes may connect to each other.
    ///
    /// Permitted iff both endpoints are individually whitelisted.
    pub fn connection_allowed(&self, a: &EnodeId, b: &EnodeId) -> ConnectionVerdict {
        ConnectionVerdict::from_bool(self.is_allowed(a) && self.is_allowed(b))
    }
}

//! Error types for the node rules engine.
//!
//! Two outcomes are deliberately *not* errors: adding a duplicate enode
//! (signaled by a `false` result) and removing an absent one (a silent
//! no-op). Every variant here is checked before any structural change, so a
//! failed call never leaves the whitelist partially mutated.

use thiserror::Error;

use crate::domain::enode::EnodeKey;

/// Node rules error taxonomy.
///
/// The display strings are the reason codes surfaced to callers; UIs match
/// on them to render the right message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeRulesError {
    /// Caller is not in the administrator set.
    #[error("Sender not authorized")]
    SenderNotAuthorized,

    /// A mutation was attempted while the read-only gate is engaged.
    #[error("In read only mode: rules cannot be modified")]
    ReadOnly,

    /// `enter_read_only` while already read-only.
    #[error("Already in read only mode")]
    AlreadyReadOnly,

    /// `exit_read_only` while writable.
    #[error("Not in read only mode")]
    NotReadOnly,

    /// Head query against an empty whitelist.
    #[error("Whitelist is empty")]
    EmptyWhitelist,

    /// Entry lookup with a key that is not in the whitelist.
    #[error("Unknown enode key: {0}")]
    UnknownKey(EnodeKey),
}

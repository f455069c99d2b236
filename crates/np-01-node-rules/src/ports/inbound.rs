//! # Driving Port (Inbound API)
//!
//! The operations this engine exposes to callers: RPC handlers, the admin
//! UI bridge, and the low-level admission callback all go through this trait.
//!
//! Mutating operations identify the caller by account address and pass
//! through the authorization gate and then the read-only gate before any
//! structural change. Read queries bypass both gates.

use crate::domain::{
    Address, ConnectionVerdict, EnodeEntry, EnodeId, EnodeKey, NodeRulesError,
};

/// Primary API for the node rules engine.
pub trait NodeRulesApi {
    /// Add an enode to the whitelist.
    ///
    /// Returns `Ok(false)` when the enode was already present (a duplicate
    /// add is not an error). Fails with `SenderNotAuthorized` or `ReadOnly`
    /// before any structural change.
    fn add_enode(&mut self, caller: &Address, enode: EnodeId) -> Result<bool, NodeRulesError>;

    /// Remove an enode from the whitelist.
    ///
    /// Removing an absent enode is a tolerated no-op. Fails with
    /// `SenderNotAuthorized` or `ReadOnly` before any structural change.
    fn remove_enode(&mut self, caller: &Address, enode: &EnodeId) -> Result<(), NodeRulesError>;

    /// Whether an enode is currently whitelisted.
    fn enode_allowed(&self, enode: &EnodeId) -> bool;

    /// Whether two enodes may connect (both must be whitelisted).
    fn connection_allowed(&self, a: &EnodeId, b: &EnodeId) -> ConnectionVerdict;

    /// Wire form of [`connection_allowed`](Self::connection_allowed): the
    /// fixed 32-byte sentinel the admission callback contract expects.
    fn connection_allowed_raw(&self, a: &EnodeId, b: &EnodeId) -> [u8; 32] {
        self.connection_allowed(a, b).as_bytes32()
    }

    /// Derive the whitelist key for an identity.
    fn compute_key(&self, enode: &EnodeId) -> EnodeKey;

    /// Number of whitelisted enodes.
    fn get_size(&self) -> usize;

    /// The head entry of the whitelist cycle.
    ///
    /// Fails with `EmptyWhitelist` when nothing has been added; traversal
    /// starts from the returned entry's `next` key.
    fn get_head_enode(&self) -> Result<EnodeEntry, NodeRulesError>;

    /// Look up an entry by key, exposing its cycle links and identity.
    fn get_enode(&self, key: &EnodeKey) -> Result<EnodeEntry, NodeRulesError>;

    /// Freeze all mutations. Admin-gated; fails if already read-only.
    fn enter_read_only(&mut self, caller: &Address) -> Result<(), NodeRulesError>;

    /// Unfreeze mutations. Admin-gated; fails if not read-only.
    fn exit_read_only(&mut self, caller: &Address) -> Result<(), NodeRulesError>;

    /// Whether the read-only gate is engaged.
    fn is_read_only(&self) -> bool;
}

//! Service layer: wires the whitelist, the read-only gate, and the
//! authorization gate behind the inbound API.
//!
//! Gate order on every mutating call: authorization first, then read-only,
//! then key derivation and the structural change, then notification. All
//! failure conditions are checked before anything is touched, so a failed
//! call is always a complete no-op.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    Address, ConnectionVerdict, EnodeEntry, EnodeId, EnodeKey, NodeRulesError, ReadOnlyMode,
    Whitelist,
};
use crate::ports::{AdminOracle, NodeEventPublisher, NodeRulesApi, NodeRulesEvent};

/// The node rules engine.
///
/// Constructed empty with its collaborators injected; the host decides how
/// access is serialized (mutators take `&mut self`, so a shared deployment
/// puts the service behind a lock).
pub struct NodeRulesService {
    whitelist: Whitelist,
    mode: ReadOnlyMode,
    admins: Arc<dyn AdminOracle>,
    events: Arc<dyn NodeEventPublisher>,
}

impl NodeRulesService {
    /// Create an empty rules engine with its collaborators.
    pub fn new(admins: Arc<dyn AdminOracle>, events: Arc<dyn NodeEventPublisher>) -> Self {
        Self {
            whitelist: Whitelist::new(),
            mode: ReadOnlyMode::new(),
            admins,
            events,
        }
    }

    /// Read access to the underlying whitelist.
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Seed an enode during deployment bootstrap.
    ///
    /// Bypasses the caller gates and emits no event; only the host's startup
    /// path may use this, before the service is shared.
    pub fn bootstrap_enode(&mut self, enode: EnodeId) -> bool {
        self.whitelist.add(enode)
    }

    /// Engage the read-only gate during deployment bootstrap.
    ///
    /// Same contract as [`bootstrap_enode`](Self::bootstrap_enode): startup
    /// path only. No-op when already read-only.
    pub fn bootstrap_read_only(&mut self) {
        if self.mode.enter().is_err() {
            debug!("bootstrap: already in read-only mode");
        }
    }

    fn authorize(&self, caller: &Address) -> Result<(), NodeRulesError> {
        if !self.admins.is_authorized(caller) {
            return Err(NodeRulesError::SenderNotAuthorized);
        }
        Ok(())
    }

    fn emit(&self, event: NodeRulesEvent) {
        if let Err(reason) = self.events.publish(event) {
            warn!(%reason, "failed to publish node rules event");
        }
    }
}

impl NodeRulesApi for NodeRulesService {
    fn add_enode(&mut self, caller: &Address, enode: EnodeId) -> Result<bool, NodeRulesError> {
        self.authorize(caller)?;
        self.mode.ensure_writable()?;

        let added = self.whitelist.add(enode);
        if added {
            info!(key = %enode.compute_key(), port = enode.port, "enode added to whitelist");
        } else {
            debug!(key = %enode.compute_key(), "duplicate enode add ignored");
        }
        self.emit(NodeRulesEvent::NodeAdded { enode, added });

        Ok(added)
    }

    fn remove_enode(&mut self, caller: &Address, enode: &EnodeId) -> Result<(), NodeRulesError> {
        self.authorize(caller)?;
        self.mode.ensure_writable()?;

        let removed = self.whitelist.remove(enode);
        if removed {
            info!(key = %enode.compute_key(), "enode removed from whitelist");
        } else {
            debug!(key = %enode.compute_key(), "remove of absent enode ignored");
        }
        self.emit(NodeRulesEvent::NodeRemoved {
            enode: *enode,
            removed,
        });

        Ok(())
    }

    fn enode_allowed(&self, enode: &EnodeId) -> bool {
        self.whitelist.is_allowed(enode)
    }

    fn connection_allowed(&self, a: &EnodeId, b: &EnodeId) -> ConnectionVerdict {
        self.whitelist.connection_allowed(a, b)
    }

    fn compute_key(&self, enode: &EnodeId) -> EnodeKey {
        enode.compute_key()
    }

    fn get_size(&self) -> usize {
        self.whitelist.len()
    }

    fn get_head_enode(&self) -> Result<EnodeEntry, NodeRulesError> {
        let head = self.whitelist.head_key().ok_or(NodeRulesError::EmptyWhitelist)?;
        self.get_enode(&head)
    }

    fn get_enode(&self, key: &EnodeKey) -> Result<EnodeEntry, NodeRulesError> {
        self.whitelist
            .get(key)
            .copied()
            .ok_or(NodeRulesError::UnknownKey(*key))
    }

    fn enter_read_only(&mut self, caller: &Address) -> Result<(), NodeRulesError> {
        self.authorize(caller)?;
        self.mode.enter()?;
        info!("read-only mode engaged");
        Ok(())
    }

    fn exit_read_only(&mut self, caller: &Address) -> Result<(), NodeRulesError> {
        self.authorize(caller)?;
        self.mode.exit()?;
        info!("read-only mode released");
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        self.mode.is_read_only()
    }
}

//! # Driven Ports (Outbound SPI)
//!
//! The collaborators this engine requires the host to provide. Both are
//! injected at construction time as trait objects; the engine never resolves
//! them through a registry.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, EnodeId};

/// Administrator-role store.
///
/// Consulted on every mutating call and on every mode transition; results
/// are never cached because the administrator set can change between calls.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the host may share one oracle
/// across tasks.
pub trait AdminOracle: Send + Sync {
    /// Whether the caller may mutate the rules.
    fn is_authorized(&self, caller: &Address) -> bool;
}

/// Audit events emitted by the engine.
///
/// Every add and remove attempt produces an event, including duplicate adds
/// (`added: false`) and absent removes (`removed: false`), so auditors can
/// reconstruct the full mutation history without replaying store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRulesEvent {
    /// An add attempt completed.
    NodeAdded {
        /// The identity that was submitted.
        enode: EnodeId,
        /// `true` when a new entry was created, `false` on duplicate.
        added: bool,
    },
    /// A remove attempt completed.
    NodeRemoved {
        /// The identity that was submitted.
        enode: EnodeId,
        /// `true` when an entry was deleted, `false` when absent.
        removed: bool,
    },
}

/// Event publishing port.
///
/// Emission is best-effort from the engine's point of view: a failed publish
/// is logged and does not roll back the mutation it describes.
pub trait NodeEventPublisher: Send + Sync {
    /// Publish an audit event.
    fn publish(&self, event: NodeRulesEvent) -> Result<(), String>;
}

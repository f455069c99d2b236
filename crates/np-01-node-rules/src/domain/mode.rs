//! Read-only mode: a two-state machine that freezes all whitelist mutations.
//!
//! Transitions are strict: entering while already read-only and exiting while
//! writable are both errors, so operators always know which state a toggle
//! left the engine in. Read queries are never affected by the mode.

use crate::domain::errors::NodeRulesError;

/// The read-only state machine. Starts writable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadOnlyMode {
    read_only: bool,
}

impl ReadOnlyMode {
    /// Create the mode gate in the writable state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether mutations are currently frozen.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Enter read-only mode.
    pub fn enter(&mut self) -> Result<(), NodeRulesError> {
        if self.read_only {
            return Err(NodeRulesError::AlreadyReadOnly);
        }
        self.read_only = true;
        Ok(())
    }

    /// Exit read-only mode.
    pub fn exit(&mut self) -> Result<(), NodeRulesError> {
        if !self.read_only {
            return Err(NodeRulesError::NotReadOnly);
        }
        self.read_only = false;
        Ok(())
    }

    /// Fail with the mutation-rejected error when the gate is engaged.
    ///
    /// Called by every mutating entry point before any structural change.
    pub fn ensure_writable(&self) -> Result<(), NodeRulesError> {
        if self.read_only {
            return Err(NodeRulesError::ReadOnly);
        }
        Ok(())
    }
}

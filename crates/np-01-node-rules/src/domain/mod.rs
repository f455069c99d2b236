//! Domain layer: the whitelist data structure, identity and key derivation,
//! admission queries, the read-only state machine, and the error taxonomy.
//!
//! This layer has no knowledge of collaborators; gating against the
//! administrator set and event emission happen in the service layer.

pub mod admission;
pub mod enode;
pub mod errors;
pub mod mode;
pub mod whitelist;

pub use admission::{ConnectionVerdict, NOT_PERMITTED_RESPONSE, PERMITTED_RESPONSE};
pub use enode::{Address, EnodeId, EnodeKey};
pub use errors::NodeRulesError;
pub use mode::ReadOnlyMode;
pub use whitelist::{EnodeEntry, Whitelist, WhitelistIter};

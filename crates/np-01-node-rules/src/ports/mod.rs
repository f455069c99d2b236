//! Ports layer: trait definitions at the engine's boundaries.
//!
//! - `inbound` — the API callers drive.
//! - `outbound` — the collaborators the engine drives (administrator store,
//!   event publisher).

pub mod inbound;
pub mod outbound;

pub use inbound::NodeRulesApi;
pub use outbound::{AdminOracle, NodeEventPublisher, NodeRulesEvent};

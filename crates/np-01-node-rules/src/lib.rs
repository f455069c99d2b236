//! # Node Rules Engine
//!
//! Network-admission permissioning for a permissioned peer-to-peer network:
//! an authoritative whitelist of enode identities that answers "may this
//! peer join?" and "may these two peers connect?". Mutations are restricted
//! to an injected administrator set and can be frozen globally via a
//! read-only mode.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - **Domain layer:** the circular doubly-linked whitelist, Keccak-256 key
//!   derivation, admission queries, and the read-only state machine.
//! - **Ports layer:** the inbound [`NodeRulesApi`] and the outbound
//!   [`AdminOracle`] / [`NodeEventPublisher`] collaborator traits.
//! - **Service layer:** [`NodeRulesService`] wires the gates in front of the
//!   whitelist (authorization, then read-only, then mutation, then audit
//!   event).
//! - **Adapters layer:** broadcast-backed event bus, set-backed admin
//!   registry, JSON view types.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use np_01_node_rules::{
//!     EnodeId, InMemoryNodeEventBus, NodeRulesApi, NodeRulesService,
//!     StaticAdminRegistry,
//! };
//!
//! let admin = [0xad; 20];
//! let admins = Arc::new(StaticAdminRegistry::with_admins([admin]));
//! let bus = Arc::new(InMemoryNodeEventBus::new());
//! let mut rules = NodeRulesService::new(admins, bus);
//!
//! let enode = EnodeId::new([0x9b; 32], [0x2e; 32], [0x11; 16], 30303);
//! assert!(rules.add_enode(&admin, enode).unwrap());
//! assert!(rules.enode_allowed(&enode));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Domain
pub use domain::{
    Address, ConnectionVerdict, EnodeEntry, EnodeId, EnodeKey, NodeRulesError, ReadOnlyMode,
    Whitelist, WhitelistIter, NOT_PERMITTED_RESPONSE, PERMITTED_RESPONSE,
};

// Ports
pub use ports::{AdminOracle, NodeEventPublisher, NodeRulesApi, NodeRulesEvent};

// Service
pub use service::NodeRulesService;

// Adapters
pub use adapters::{
    InMemoryNodeEventBus, NoOpEventPublisher, RpcEnodeInfo, RpcRulesStatus, StaticAdminRegistry,
};

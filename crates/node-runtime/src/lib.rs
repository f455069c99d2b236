//! # Node Runtime
//!
//! Wires the node rules engine into a running process:
//!
//! 1. Load configuration (TOML path from argv).
//! 2. Initialize structured logging.
//! 3. Construct the admin registry, audit bus, and rules service.
//! 4. Seed the whitelist and mode from configuration.
//! 5. Stream audit events to the log until shutdown.

pub mod config;

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use np_01_node_rules::{
    InMemoryNodeEventBus, NodeRulesApi, NodeRulesService, StaticAdminRegistry,
};

use crate::config::{ConfigError, RuntimeConfig};

/// Everything the runtime wires together.
pub struct RulesNode {
    /// The rules engine, shared across tasks.
    pub rules: Arc<RwLock<NodeRulesService>>,
    /// Administrator registry backing the authorization gate.
    pub admins: Arc<StaticAdminRegistry>,
    /// Audit event bus.
    pub bus: Arc<InMemoryNodeEventBus>,
}

impl RulesNode {
    /// Build and seed a node from configuration.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self, ConfigError> {
        let admins = Arc::new(StaticAdminRegistry::with_admins(config.admin_addresses()?));
        let bus = Arc::new(InMemoryNodeEventBus::new());
        let mut service = NodeRulesService::new(admins.clone(), bus.clone());

        for enode in config.whitelist_enodes()? {
            if !service.bootstrap_enode(enode) {
                warn!(port = enode.port, "duplicate enode in seed whitelist ignored");
            }
        }
        if config.read_only {
            service.bootstrap_read_only();
        }

        info!(
            whitelisted = service.get_size(),
            admins = admins.admin_count(),
            read_only = service.is_read_only(),
            "rules engine seeded"
        );

        Ok(Self {
            rules: Arc::new(RwLock::new(service)),
            admins,
            bus,
        })
    }
}

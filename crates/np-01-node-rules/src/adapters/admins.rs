//! Set-backed administrator registry.
//!
//! Stands in for an external administrator-role store: a mutable set of
//! account addresses consulted by the authorization gate. Membership changes
//! take effect on the next call because the engine never caches
//! authorization results.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::domain::Address;
use crate::ports::AdminOracle;

/// In-process [`AdminOracle`] over a set of addresses.
#[derive(Debug, Default)]
pub struct StaticAdminRegistry {
    admins: RwLock<HashSet<Address>>,
}

impl StaticAdminRegistry {
    /// Create an empty registry (authorizes nobody).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with an initial administrator set.
    #[must_use]
    pub fn with_admins(admins: impl IntoIterator<Item = Address>) -> Self {
        Self {
            admins: RwLock::new(admins.into_iter().collect()),
        }
    }

    /// Grant the administrator role. Returns `false` if already granted.
    pub fn add_admin(&self, admin: Address) -> bool {
        self.admins
            .write()
            .map(|mut set| set.insert(admin))
            .unwrap_or(false)
    }

    /// Revoke the administrator role. Returns `false` if not an admin.
    pub fn remove_admin(&self, admin: &Address) -> bool {
        self.admins
            .write()
            .map(|mut set| set.remove(admin))
            .unwrap_or(false)
    }

    /// Number of registered administrators.
    pub fn admin_count(&self) -> usize {
        self.admins.read().map(|set| set.len()).unwrap_or(0)
    }
}

impl AdminOracle for StaticAdminRegistry {
    fn is_authorized(&self, caller: &Address) -> bool {
        self.admins
            .read()
            .map(|set| set.contains(caller))
            .unwrap_or(false)
    }
}

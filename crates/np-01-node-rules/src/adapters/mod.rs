//! Adapters: concrete implementations of the outbound ports and view types
//! for the RPC surface.

pub mod admins;
pub mod api;
pub mod bus;

pub use admins::StaticAdminRegistry;
pub use api::{RpcEnodeInfo, RpcRulesStatus};
pub use bus::{InMemoryNodeEventBus, NoOpEventPublisher, DEFAULT_CHANNEL_CAPACITY};

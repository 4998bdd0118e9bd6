//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** what this crate exposes to the gossip,
//!   replication, transport and HTTP subsystems
//! - **Driven Ports (Outbound):** what the host must provide (raw settings
//!   input, authentication provider factory)

pub mod inbound;
pub mod outbound;

pub use inbound::ClusterSettingsApi;
pub use outbound::{AuthenticationProviderFactory, ConfigProvider};

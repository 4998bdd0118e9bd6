//! # Cluster Settings Subsystem
//!
//! **Subsystem ID:** 1
//!
//! Node identity, gossip advertisement and replication quorum settings for
//! an EventCluster node.
//!
//! Every node carries a stable multi-interface identity used to recognise
//! itself in gossip membership tables, publishes endpoints that may differ
//! from the ones it binds (NAT, container port mapping), and is started with
//! quorum thresholds that decide when a write is durable and when it is
//! visible. Getting these wrong breaks consistency silently, so every
//! invariant is checked once, at construction, and a node with invalid
//! settings refuses to start.
//!
//! ## Pure Core
//!
//! The domain, ports and service perform no I/O. File loading is
//! feature-gated:
//!
//! - `toml-config` - `TomlConfigProvider` (serde, toml), on by default
//! - `test-utils` - fixtures for downstream tests
//!
//! ## Architecture
//!
//! - **Domain Layer:** endpoints, identity, advertisement, validated settings,
//!   built-in auth factory marker
//! - **Ports Layer:** `ConfigProvider`, `AuthenticationProviderFactory`,
//!   `ClusterSettingsApi`
//! - **Service Layer:** `ClusterSettingsService`, a shared handle
//! - **Adapters Layer:** static and TOML config providers
//!
//! ## Example
//!
//! ```rust
//! use ec_01_cluster_settings::{ClusterSettings, ClusterSettingsInput};
//!
//! let input = ClusterSettingsInput {
//!     internal_tcp: Some("10.0.0.1:1112".parse().unwrap()),
//!     external_tcp: Some("192.0.2.1:1113".parse().unwrap()),
//!     internal_http: Some("10.0.0.1:2112".parse().unwrap()),
//!     external_http: Some("192.0.2.1:2113".parse().unwrap()),
//!     cluster_dns: "cluster.internal".to_string(),
//!     cluster_node_count: 3,
//!     prepare_ack_count: 2,
//!     commit_ack_count: 2,
//!     ..ClusterSettingsInput::default()
//! };
//!
//! let settings = ClusterSettings::build(input).unwrap();
//! let node = settings.node();
//!
//! // Gossip self-recognition goes by endpoint membership.
//! assert!(node.belongs_to_self(Some(&"192.0.2.1:2113".parse().unwrap())));
//! assert!(!node.belongs_to_self(None));
//! assert_eq!(settings.quorum().majority(), 2);
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Test fixtures (valid input, sample endpoints).
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// CORE RE-EXPORTS
// =============================================================================

// Domain entities
pub use domain::{
    Certificate, ClusterSettings, ClusterSettingsInput, ConfigurationError, DiscoveryMode,
    DiscoverySettings, Endpoint, EndpointRole, EndpointSet, ExposureFlags, GossipAdvertisement,
    GossipTiming, HeartbeatTiming, HttpSettings, InstanceId, Interface,
    InternalAuthenticationProviderFactory, Invariant, NodeIdentity,
    OperationalSettings, PublicExposure, QuorumHealth, QuorumSettings, SecuritySettings,
    StatsStorage, StorageSettings, TimingSettings,
};

// Validation
pub use domain::validate;

// Port traits
pub use ports::{AuthenticationProviderFactory, ClusterSettingsApi, ConfigProvider};

// Service
pub use service::ClusterSettingsService;

// =============================================================================
// ADAPTER RE-EXPORTS
// =============================================================================

pub use adapters::{ConfigError, StaticConfigProvider};

#[cfg(feature = "toml-config")]
pub use adapters::TomlConfigProvider;

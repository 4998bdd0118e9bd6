//! Test fixtures for cluster settings.
//!
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use ec_01_cluster_settings::test_utils::valid_input;
//! use ec_01_cluster_settings::ClusterSettings;
//!
//! let settings = ClusterSettings::build(valid_input()).unwrap();
//! assert_eq!(settings.quorum().cluster_node_count, 3);
//! ```

use std::net::SocketAddr;

use uuid::Uuid;

use crate::domain::{Certificate, ClusterSettingsInput, EndpointSet};

/// Instance id used by [`valid_input`].
pub const TEST_INSTANCE_ID: Uuid = Uuid::from_u128(0x0EC0_1000_0000_0000_0000_0000_0000_0001);

/// Endpoints of a node with distinct internal and external addresses and no
/// secure listeners.
pub fn sample_endpoints() -> EndpointSet {
    EndpointSet {
        internal_tcp: SocketAddr::from(([10, 0, 0, 1], 1112)),
        internal_secure_tcp: None,
        external_tcp: SocketAddr::from(([192, 0, 2, 1], 1113)),
        external_secure_tcp: None,
        internal_http: SocketAddr::from(([10, 0, 0, 1], 2112)),
        external_http: SocketAddr::from(([192, 0, 2, 1], 2113)),
    }
}

/// Settings input that passes every invariant: three nodes, majority quorums,
/// DNS discovery.
pub fn valid_input() -> ClusterSettingsInput {
    let ep = sample_endpoints();
    ClusterSettingsInput {
        instance_id: TEST_INSTANCE_ID,
        internal_tcp: Some(ep.internal_tcp),
        external_tcp: Some(ep.external_tcp),
        internal_http: Some(ep.internal_http),
        external_http: Some(ep.external_http),
        discover_via_dns: true,
        cluster_dns: "cluster.internal".to_string(),
        cluster_node_count: 3,
        prepare_ack_count: 2,
        commit_ack_count: 2,
        ..ClusterSettingsInput::default()
    }
}

/// A certificate with fixed, non-secret content.
pub fn test_certificate() -> Certificate {
    Certificate::new("CN=eventcluster-test", b"test certificate bytes".to_vec())
}

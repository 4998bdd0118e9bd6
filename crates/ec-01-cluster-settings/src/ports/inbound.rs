//! # Driving Ports (Inbound API)
//!
//! Read-only view of the validated settings for the subsystems that consume
//! them.

use crate::domain::{Endpoint, EndpointSet, ExposureFlags, NodeIdentity, QuorumHealth, QuorumSettings};

/// Settings queries used by the gossip, replication and HTTP layers.
///
/// # Example
///
/// ```rust,ignore
/// use ec_01_cluster_settings::ports::ClusterSettingsApi;
///
/// fn on_gossip_entry<T: ClusterSettingsApi>(api: &T, peer: Endpoint) {
///     if api.is_self(Some(&peer)) {
///         return;
///     }
///     // treat as a distinct member
/// }
/// ```
pub trait ClusterSettingsApi {
    /// Identity of the local node.
    fn node(&self) -> &NodeIdentity;

    /// Whether an endpoint observed on the wire is one of ours.
    ///
    /// `None` is never ours. A `false` result means the peer is a distinct
    /// node; it is not an error.
    fn is_self(&self, endpoint: Option<&Endpoint>) -> bool;

    /// The endpoint set published to peers on every gossip round.
    fn advertised_endpoints(&self) -> EndpointSet;

    /// Cluster size and acknowledgement thresholds.
    fn quorum(&self) -> QuorumSettings;

    /// Majority assessment of the thresholds.
    fn quorum_health(&self) -> QuorumHealth;

    /// Current public interface exposure.
    ///
    /// Changes made through [`PublicExposure`](crate::domain::PublicExposure)
    /// are visible on the next call.
    fn exposure(&self) -> ExposureFlags;
}

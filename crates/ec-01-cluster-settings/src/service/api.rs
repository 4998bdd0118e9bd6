use crate::domain::{Endpoint, EndpointSet, ExposureFlags, NodeIdentity, QuorumHealth, QuorumSettings};
use crate::ports::ClusterSettingsApi;

use super::core::ClusterSettingsService;

impl ClusterSettingsApi for ClusterSettingsService {
    fn node(&self) -> &NodeIdentity {
        self.settings.node()
    }

    fn is_self(&self, endpoint: Option<&Endpoint>) -> bool {
        self.settings.node().belongs_to_self(endpoint)
    }

    fn advertised_endpoints(&self) -> EndpointSet {
        self.settings.gossip_advertise().advertised()
    }

    fn quorum(&self) -> QuorumSettings {
        *self.settings.quorum()
    }

    fn quorum_health(&self) -> QuorumHealth {
        self.settings.quorum_health()
    }

    fn exposure(&self) -> ExposureFlags {
        self.settings.exposure().snapshot()
    }
}

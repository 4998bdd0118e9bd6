use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{ClusterSettings, ConfigurationError};
use crate::ports::ConfigProvider;

/// Cluster settings service implementing the driving port.
///
/// # Example
///
/// ```rust,ignore
/// use ec_01_cluster_settings::adapters::TomlConfigProvider;
/// use ec_01_cluster_settings::ports::ClusterSettingsApi;
/// use ec_01_cluster_settings::service::ClusterSettingsService;
///
/// let provider = TomlConfigProvider::load("node.toml")?;
/// let service = ClusterSettingsService::from_provider(&provider)?;
/// assert!(service.is_self(Some(&service.node().endpoints().internal_tcp)));
/// ```
#[derive(Debug, Clone)]
pub struct ClusterSettingsService {
    pub(crate) settings: Arc<ClusterSettings>,
}

impl ClusterSettingsService {
    pub fn new(settings: ClusterSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Resolve input from `provider` and validate it.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant. The node must not start.
    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self, ConfigurationError> {
        let settings = ClusterSettings::build(provider.cluster_settings_input()).map_err(|e| {
            warn!(invariant = ?e.invariant(), error = %e, "Cluster settings rejected");
            e
        })?;

        info!(
            instance_id = %settings.node().instance_id(),
            cluster_node_count = settings.quorum().cluster_node_count,
            discovery = %settings.discovery().mode(),
            "Cluster settings ready"
        );
        Ok(Self::new(settings))
    }

    /// The validated settings.
    pub fn settings(&self) -> &Arc<ClusterSettings> {
        &self.settings
    }
}

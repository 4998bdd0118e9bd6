//! # Node Bootstrap
//!
//! Resolves raw settings, validates them exactly once and owns the
//! resulting service handle for the lifetime of the process.

use std::path::Path;

use ec_01_cluster_settings::{
    ClusterSettings, ClusterSettingsApi, ClusterSettingsInput, ClusterSettingsService, ConfigError,
    StaticConfigProvider, TomlConfigProvider,
};
use tracing::{error, info};

use crate::env::apply_env_overrides;

/// Load the settings file, or start from defaults when there is none, then
/// apply environment overrides from `lookup`.
///
/// # Errors
///
/// Fails if the file cannot be read or holds a malformed value.
pub fn load_input(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClusterSettingsInput, ConfigError> {
    let mut input = match path {
        Some(path) => TomlConfigProvider::load(path)?.into_input(),
        None => {
            info!("No settings file given, starting from defaults");
            ClusterSettingsInput::default()
        }
    };
    apply_env_overrides(&mut input, lookup);
    Ok(input)
}

/// A node whose settings passed validation.
#[derive(Debug, Clone)]
pub struct NodeRuntime {
    settings: ClusterSettingsService,
}

impl NodeRuntime {
    /// Validate `input` and log the resulting settings.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant; the node must not start.
    pub fn new(input: ClusterSettingsInput) -> Result<Self, ConfigError> {
        let provider = StaticConfigProvider::new(input);
        let settings = ClusterSettingsService::from_provider(&provider).map_err(|e| {
            error!(error = %e, "Invalid cluster settings, refusing to start");
            ConfigError::from(e)
        })?;

        log_settings(settings.settings());

        // Below-majority thresholds were already warned about during build.
        info!(quorum = %settings.quorum_health(), "Quorum thresholds checked");

        Ok(Self { settings })
    }

    /// The validated settings handle shared with every subsystem.
    pub fn settings(&self) -> &ClusterSettingsService {
        &self.settings
    }

    /// Announce readiness and park until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Fails if the signal handler cannot be installed.
    pub async fn run(&self) -> std::io::Result<()> {
        let node = self.settings.node();
        let advertised = self.settings.advertised_endpoints();
        info!(
            instance_id = %node.instance_id(),
            internal_tcp = %advertised.internal_tcp,
            external_http = %advertised.external_http,
            "Node is running. Press Ctrl+C to stop."
        );

        tokio::signal::ctrl_c().await?;

        info!("Shutdown complete");
        Ok(())
    }
}

/// One `info!` event per dump line, so each setting is a separate record.
fn log_settings(settings: &ClusterSettings) {
    info!("===========================================");
    info!("  EventCluster Node v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");
    for line in settings.to_string().lines() {
        info!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use ec_01_cluster_settings::test_utils::valid_input;
    use ec_01_cluster_settings::{Invariant, QuorumHealth};

    use super::*;

    #[test]
    fn test_valid_input_starts() {
        let runtime = NodeRuntime::new(valid_input()).unwrap();
        assert_eq!(runtime.settings().quorum_health(), QuorumHealth::Majority);
    }

    #[test]
    fn test_invalid_input_refuses_to_start() {
        let mut input = valid_input();
        input.worker_threads = 0;

        match NodeRuntime::new(input) {
            Err(ConfigError::Configuration(e)) => assert_eq!(e.invariant(), Invariant::PositiveCounts),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_below_majority_quorum_still_starts() {
        let mut input = valid_input();
        input.cluster_node_count = 5;
        input.prepare_ack_count = 2;
        input.commit_ack_count = 3;

        let runtime = NodeRuntime::new(input).unwrap();
        let health = runtime.settings().quorum_health();
        assert!(!health.is_sanctioned());
        assert!(matches!(health, QuorumHealth::BelowMajority { majority: 3, .. }));
    }

    #[test]
    fn test_defaults_without_file_fail_validation() {
        let input = load_input(None, |_| None).unwrap();

        assert!(input.internal_tcp.is_none());
        assert!(NodeRuntime::new(input).is_err());
    }
}

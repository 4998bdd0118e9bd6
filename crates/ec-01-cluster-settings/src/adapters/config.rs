use thiserror::Error;

use crate::domain::{ClusterSettingsInput, ConfigurationError};
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - In-memory input for tests and embedding
// ============================================================================

/// Configuration provider that hands out a fixed input.
///
/// Useful for testing and for hosts that resolve settings themselves. For
/// file-based deployments, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    input: ClusterSettingsInput,
}

impl StaticConfigProvider {
    #[must_use]
    pub fn new(input: ClusterSettingsInput) -> Self {
        Self { input }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn cluster_settings_input(&self) -> ClusterSettingsInput {
        self.input.clone()
    }
}

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },

    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value that parsed as TOML but is not a valid address, id or name.
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    /// The loaded input violates a settings invariant.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

// ============================================================================
// TomlConfigProvider - File-based loading (requires "toml-config" feature)
// ============================================================================

#[cfg(feature = "toml-config")]
mod toml_config {
    use std::fs;
    use std::net::IpAddr;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use serde::Deserialize;
    use tracing::debug;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{Certificate, Endpoint, StatsStorage};

    /// Configuration file structure.
    #[derive(Debug, Deserialize, Default)]
    struct ConfigFile {
        #[serde(default)]
        node: NodeSection,
        #[serde(default)]
        endpoints: EndpointsSection,
        #[serde(default)]
        advertise: AdvertiseSection,
        #[serde(default)]
        http: HttpSection,
        #[serde(default)]
        discovery: DiscoverySection,
        #[serde(default)]
        replication: ReplicationSection,
        #[serde(default)]
        gossip: GossipSection,
        #[serde(default)]
        heartbeat: HeartbeatSection,
        #[serde(default)]
        security: SecuritySection,
        #[serde(default)]
        storage: StorageSection,
        #[serde(default)]
        stats: StatsSection,
        #[serde(default)]
        projections: ProjectionsSection,
        #[serde(default)]
        exposure: ExposureSection,
    }

    #[derive(Debug, Deserialize, Default)]
    struct NodeSection {
        instance_id: Option<String>,
        debug_index: Option<i32>,
        worker_threads: Option<usize>,
        reader_threads_count: Option<usize>,
        node_priority: Option<i32>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct EndpointsSection {
        internal_tcp: Option<String>,
        internal_secure_tcp: Option<String>,
        external_tcp: Option<String>,
        external_secure_tcp: Option<String>,
        internal_http: Option<String>,
        external_http: Option<String>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct AdvertiseSection {
        internal_ip: Option<String>,
        external_ip: Option<String>,
        internal_http_port: Option<u16>,
        external_http_port: Option<u16>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct HttpSection {
        internal_prefixes: Option<Vec<String>>,
        external_prefixes: Option<Vec<String>>,
        enable_trusted_auth: Option<bool>,
        disable_http_caching: Option<bool>,
        log_http_requests: Option<bool>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct DiscoverySection {
        discover_via_dns: Option<bool>,
        cluster_dns: Option<String>,
        #[serde(default)]
        gossip_seeds: Vec<String>,
        gossip_on_single_node: Option<bool>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct ReplicationSection {
        cluster_node_count: Option<usize>,
        prepare_ack_count: Option<usize>,
        commit_ack_count: Option<usize>,
        prepare_timeout_ms: Option<u64>,
        commit_timeout_ms: Option<u64>,
        min_flush_delay_ms: Option<u64>,
        better_ordering: Option<bool>,
        additional_consumer_strategies: Option<Vec<String>>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct GossipSection {
        interval_ms: Option<u64>,
        allowed_time_difference_ms: Option<u64>,
        timeout_ms: Option<u64>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct HeartbeatSection {
        internal_interval_ms: Option<u64>,
        internal_timeout_ms: Option<u64>,
        external_interval_ms: Option<u64>,
        external_timeout_ms: Option<u64>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct SecuritySection {
        use_ssl: Option<bool>,
        disable_insecure_tcp: Option<bool>,
        ssl_target_host: Option<String>,
        ssl_validate_server: Option<bool>,
        certificate_path: Option<PathBuf>,
        certificate_subject: Option<String>,
        authentication: Option<String>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct StorageSection {
        max_memtable_entry_count: Option<usize>,
        hash_collision_read_limit: Option<usize>,
        index: Option<PathBuf>,
        index_cache_depth: Option<u32>,
        index_bitness_version: Option<u8>,
        verify_db_hash: Option<bool>,
        unsafe_ignore_hard_deletes: Option<bool>,
        always_keep_scavenged: Option<bool>,
        disable_scavenge_merging: Option<bool>,
        scavenge_history_max_age: Option<u32>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct StatsSection {
        period_secs: Option<u64>,
        storage: Option<String>,
        enable_histograms: Option<bool>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct ProjectionsSection {
        start_standard_projections: Option<bool>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct ExposureSection {
        admin_on_public: Option<bool>,
        stats_on_public: Option<bool>,
        gossip_on_public: Option<bool>,
    }

    /// TOML-based configuration provider.
    ///
    /// Every key is optional; missing keys keep the
    /// [`ClusterSettingsInput::default`] value, so a missing mandatory
    /// endpoint is reported by validation rather than by the parser.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [node]
    /// instance_id = "8f3b1f1e-6c0e-4d8e-9a55-1f0d5c2f7a10"
    /// worker_threads = 5
    ///
    /// [endpoints]
    /// internal_tcp = "10.0.0.1:1112"
    /// external_tcp = "192.0.2.1:1113"
    /// internal_http = "10.0.0.1:2112"
    /// external_http = "192.0.2.1:2113"
    ///
    /// [advertise]
    /// external_ip = "203.0.113.7"
    /// external_http_port = 443
    ///
    /// [discovery]
    /// discover_via_dns = true
    /// cluster_dns = "cluster.internal"
    ///
    /// [replication]
    /// cluster_node_count = 3
    /// prepare_ack_count = 2
    /// commit_ack_count = 2
    /// prepare_timeout_ms = 2000
    ///
    /// [gossip]
    /// interval_ms = 1000
    /// allowed_time_difference_ms = 60000
    /// timeout_ms = 2500
    ///
    /// [security]
    /// certificate_path = "/etc/eventcluster/node.p12"
    /// certificate_subject = "CN=node1"
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        input: ClusterSettingsInput,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file, or the certificate it names, cannot be
        /// read, or if a value is malformed.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            let provider = Self::parse(&content)?;
            debug!(path = %path.as_ref().display(), "Loaded cluster settings file");
            Ok(provider)
        }

        /// Parse configuration from a TOML string.
        ///
        /// # Errors
        ///
        /// Returns error on invalid TOML or a malformed value.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let mut input = ClusterSettingsInput::default();
            apply_node(&mut input, file.node)?;
            apply_endpoints(&mut input, file.endpoints)?;
            apply_advertise(&mut input, file.advertise)?;
            apply_http(&mut input, file.http);
            apply_discovery(&mut input, file.discovery)?;
            apply_replication(&mut input, file.replication);
            apply_timing(&mut input, file.gossip, file.heartbeat);
            apply_security(&mut input, file.security)?;
            apply_storage(&mut input, file.storage);
            apply_stats(&mut input, file.stats)?;
            set(
                &mut input.start_standard_projections,
                file.projections.start_standard_projections,
            );
            set(&mut input.admin_on_public, file.exposure.admin_on_public);
            set(&mut input.stats_on_public, file.exposure.stats_on_public);
            set(&mut input.gossip_on_public, file.exposure.gossip_on_public);

            Ok(Self { input })
        }

        /// The resolved raw input.
        pub fn input(&self) -> &ClusterSettingsInput {
            &self.input
        }

        pub fn into_input(self) -> ClusterSettingsInput {
            self.input
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn cluster_settings_input(&self) -> ClusterSettingsInput {
            self.input.clone()
        }
    }

    fn set<T>(slot: &mut T, value: Option<T>) {
        if let Some(v) = value {
            *slot = v;
        }
    }

    fn millis(slot: &mut Duration, value: Option<u64>) {
        set(slot, value.map(Duration::from_millis));
    }

    fn invalid(field: &str, value: &str) -> ConfigError {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn parse_endpoint(field: &str, value: &str) -> Result<Endpoint, ConfigError> {
        value.trim().parse().map_err(|_| invalid(field, value))
    }

    fn endpoint(field: &str, value: Option<String>) -> Result<Option<Endpoint>, ConfigError> {
        value.map(|s| parse_endpoint(field, &s)).transpose()
    }

    fn ip(field: &str, value: Option<String>) -> Result<Option<IpAddr>, ConfigError> {
        value
            .map(|s| s.trim().parse().map_err(|_| invalid(field, &s)))
            .transpose()
    }

    fn apply_node(input: &mut ClusterSettingsInput, node: NodeSection) -> Result<(), ConfigError> {
        if let Some(id) = node.instance_id {
            input.instance_id =
                Uuid::parse_str(id.trim()).map_err(|_| invalid("node.instance_id", &id))?;
        }
        set(&mut input.debug_index, node.debug_index);
        set(&mut input.worker_threads, node.worker_threads);
        set(&mut input.reader_threads_count, node.reader_threads_count);
        set(&mut input.node_priority, node.node_priority);
        Ok(())
    }

    fn apply_endpoints(input: &mut ClusterSettingsInput, ep: EndpointsSection) -> Result<(), ConfigError> {
        input.internal_tcp = endpoint("endpoints.internal_tcp", ep.internal_tcp)?;
        input.internal_secure_tcp = endpoint("endpoints.internal_secure_tcp", ep.internal_secure_tcp)?;
        input.external_tcp = endpoint("endpoints.external_tcp", ep.external_tcp)?;
        input.external_secure_tcp = endpoint("endpoints.external_secure_tcp", ep.external_secure_tcp)?;
        input.internal_http = endpoint("endpoints.internal_http", ep.internal_http)?;
        input.external_http = endpoint("endpoints.external_http", ep.external_http)?;
        Ok(())
    }

    fn apply_advertise(input: &mut ClusterSettingsInput, adv: AdvertiseSection) -> Result<(), ConfigError> {
        input.advertise_internal_ip = ip("advertise.internal_ip", adv.internal_ip)?;
        input.advertise_external_ip = ip("advertise.external_ip", adv.external_ip)?;
        // Port 0 means "advertise the bound port".
        input.advertise_internal_http_port = adv.internal_http_port.filter(|p| *p != 0);
        input.advertise_external_http_port = adv.external_http_port.filter(|p| *p != 0);
        Ok(())
    }

    fn apply_http(input: &mut ClusterSettingsInput, http: HttpSection) {
        if let Some(prefixes) = http.internal_prefixes {
            input.int_http_prefixes = Some(prefixes);
        }
        if let Some(prefixes) = http.external_prefixes {
            input.ext_http_prefixes = Some(prefixes);
        }
        set(&mut input.enable_trusted_auth, http.enable_trusted_auth);
        set(&mut input.disable_http_caching, http.disable_http_caching);
        set(&mut input.log_http_requests, http.log_http_requests);
    }

    fn apply_discovery(input: &mut ClusterSettingsInput, d: DiscoverySection) -> Result<(), ConfigError> {
        set(&mut input.discover_via_dns, d.discover_via_dns);
        set(&mut input.cluster_dns, d.cluster_dns);
        set(&mut input.gossip_on_single_node, d.gossip_on_single_node);
        input.gossip_seeds = d
            .gossip_seeds
            .into_iter()
            .map(|s| parse_endpoint("discovery.gossip_seeds", &s))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    fn apply_replication(input: &mut ClusterSettingsInput, r: ReplicationSection) {
        set(&mut input.cluster_node_count, r.cluster_node_count);
        set(&mut input.prepare_ack_count, r.prepare_ack_count);
        set(&mut input.commit_ack_count, r.commit_ack_count);
        millis(&mut input.prepare_timeout, r.prepare_timeout_ms);
        millis(&mut input.commit_timeout, r.commit_timeout_ms);
        millis(&mut input.min_flush_delay, r.min_flush_delay_ms);
        set(&mut input.better_ordering, r.better_ordering);
        set(
            &mut input.additional_consumer_strategies,
            r.additional_consumer_strategies,
        );
    }

    fn apply_timing(input: &mut ClusterSettingsInput, g: GossipSection, h: HeartbeatSection) {
        millis(&mut input.gossip.interval, g.interval_ms);
        millis(&mut input.gossip.allowed_time_difference, g.allowed_time_difference_ms);
        millis(&mut input.gossip.timeout, g.timeout_ms);
        millis(&mut input.internal_heartbeat.interval, h.internal_interval_ms);
        millis(&mut input.internal_heartbeat.timeout, h.internal_timeout_ms);
        millis(&mut input.external_heartbeat.interval, h.external_interval_ms);
        millis(&mut input.external_heartbeat.timeout, h.external_timeout_ms);
    }

    fn apply_security(input: &mut ClusterSettingsInput, s: SecuritySection) -> Result<(), ConfigError> {
        set(&mut input.use_ssl, s.use_ssl);
        set(&mut input.disable_insecure_tcp, s.disable_insecure_tcp);
        set(&mut input.ssl_validate_server, s.ssl_validate_server);
        input.ssl_target_host = s.ssl_target_host;

        if let Some(path) = s.certificate_path {
            let encoded = fs::read(&path).map_err(|e| ConfigError::Io {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
            let subject = s
                .certificate_subject
                .unwrap_or_else(|| path.display().to_string());
            input.certificate = Some(Certificate::new(subject, encoded));
        }

        if let Some(kind) = s.authentication {
            // Only the built-in provider ships with the node.
            if kind.trim() != "internal" {
                return Err(invalid("security.authentication", &kind));
            }
        }
        Ok(())
    }

    fn apply_storage(input: &mut ClusterSettingsInput, s: StorageSection) {
        set(&mut input.max_memtable_entry_count, s.max_memtable_entry_count);
        set(&mut input.hash_collision_read_limit, s.hash_collision_read_limit);
        input.index = s.index;
        set(&mut input.index_cache_depth, s.index_cache_depth);
        set(&mut input.index_bitness_version, s.index_bitness_version);
        set(&mut input.verify_db_hash, s.verify_db_hash);
        set(&mut input.unsafe_ignore_hard_deletes, s.unsafe_ignore_hard_deletes);
        set(&mut input.always_keep_scavenged, s.always_keep_scavenged);
        set(&mut input.disable_scavenge_merging, s.disable_scavenge_merging);
        set(&mut input.scavenge_history_max_age, s.scavenge_history_max_age);
    }

    fn apply_stats(input: &mut ClusterSettingsInput, s: StatsSection) -> Result<(), ConfigError> {
        set(&mut input.stats_period, s.period_secs.map(Duration::from_secs));
        set(&mut input.enable_histograms, s.enable_histograms);
        if let Some(storage) = s.storage {
            input.stats_storage = storage
                .parse::<StatsStorage>()
                .map_err(|_| invalid("stats.storage", &storage))?;
        }
        Ok(())
    }
}

#[cfg(feature = "toml-config")]
pub use toml_config::TomlConfigProvider;

#[cfg(all(test, feature = "toml-config"))]
mod tests;

//! Raw settings input.
//!
//! A flat record of every value the bootstrap sequence resolves from flags,
//! environment and files. Nothing here is validated; see
//! [`ClusterSettings::build`](super::ClusterSettings::build).

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::types::{
    Certificate, Endpoint, GossipTiming, HeartbeatTiming, InstanceId,
    InternalAuthenticationProviderFactory, StatsStorage,
};
use crate::ports::AuthenticationProviderFactory;

/// Unvalidated cluster settings.
///
/// Mandatory endpoints and HTTP prefixes are `Option` so that their absence
/// can be reported instead of being impossible to express.
#[derive(Debug, Clone)]
pub struct ClusterSettingsInput {
    // Identity
    pub instance_id: Uuid,
    pub debug_index: i32,
    pub internal_tcp: Option<Endpoint>,
    pub internal_secure_tcp: Option<Endpoint>,
    pub external_tcp: Option<Endpoint>,
    pub external_secure_tcp: Option<Endpoint>,
    pub internal_http: Option<Endpoint>,
    pub external_http: Option<Endpoint>,

    // Advertisement overrides
    pub advertise_internal_ip: Option<IpAddr>,
    pub advertise_external_ip: Option<IpAddr>,
    pub advertise_internal_http_port: Option<u16>,
    pub advertise_external_http_port: Option<u16>,

    // HTTP
    pub int_http_prefixes: Option<Vec<String>>,
    pub ext_http_prefixes: Option<Vec<String>>,
    pub enable_trusted_auth: bool,
    pub disable_http_caching: bool,
    pub log_http_requests: bool,

    // Discovery
    pub discover_via_dns: bool,
    pub cluster_dns: String,
    pub gossip_seeds: Vec<Endpoint>,
    pub gossip_on_single_node: bool,

    // Quorum
    pub cluster_node_count: usize,
    pub prepare_ack_count: usize,
    pub commit_ack_count: usize,

    // Timing
    pub prepare_timeout: Duration,
    pub commit_timeout: Duration,
    pub min_flush_delay: Duration,
    pub gossip: GossipTiming,
    pub internal_heartbeat: HeartbeatTiming,
    pub external_heartbeat: HeartbeatTiming,

    // Security
    pub use_ssl: bool,
    pub disable_insecure_tcp: bool,
    pub ssl_target_host: Option<String>,
    pub ssl_validate_server: bool,
    pub certificate: Option<Certificate>,
    pub authentication_provider_factory: Arc<dyn AuthenticationProviderFactory>,

    // Storage engine
    pub max_memtable_entry_count: usize,
    pub hash_collision_read_limit: usize,
    pub index: Option<PathBuf>,
    pub index_cache_depth: u32,
    pub index_bitness_version: u8,
    pub verify_db_hash: bool,
    pub unsafe_ignore_hard_deletes: bool,
    pub always_keep_scavenged: bool,
    pub disable_scavenge_merging: bool,
    pub scavenge_history_max_age: u32,

    // Operational
    pub worker_threads: usize,
    pub reader_threads_count: usize,
    pub node_priority: i32,
    pub start_standard_projections: bool,
    pub better_ordering: bool,
    pub stats_period: Duration,
    pub stats_storage: StatsStorage,
    pub enable_histograms: bool,
    pub additional_consumer_strategies: Vec<String>,

    // Public interface exposure
    pub admin_on_public: bool,
    pub stats_on_public: bool,
    pub gossip_on_public: bool,
}

impl Default for ClusterSettingsInput {
    fn default() -> Self {
        Self {
            instance_id: *InstanceId::generate().as_uuid(),
            debug_index: 0,
            internal_tcp: None,
            internal_secure_tcp: None,
            external_tcp: None,
            external_secure_tcp: None,
            internal_http: None,
            external_http: None,

            advertise_internal_ip: None,
            advertise_external_ip: None,
            advertise_internal_http_port: None,
            advertise_external_http_port: None,

            int_http_prefixes: Some(Vec::new()),
            ext_http_prefixes: Some(Vec::new()),
            enable_trusted_auth: false,
            disable_http_caching: false,
            log_http_requests: false,

            // DNS discovery with no name: an unconfigured node refuses to start.
            discover_via_dns: true,
            cluster_dns: String::new(),
            gossip_seeds: Vec::new(),
            gossip_on_single_node: false,

            cluster_node_count: 1,
            prepare_ack_count: 1,
            commit_ack_count: 1,

            prepare_timeout: Duration::from_millis(2000),
            commit_timeout: Duration::from_millis(2000),
            min_flush_delay: Duration::from_millis(2),
            gossip: GossipTiming::default(),
            internal_heartbeat: HeartbeatTiming::INTERNAL_DEFAULT,
            external_heartbeat: HeartbeatTiming::EXTERNAL_DEFAULT,

            use_ssl: false,
            disable_insecure_tcp: false,
            ssl_target_host: None,
            ssl_validate_server: true,
            certificate: None,
            authentication_provider_factory: Arc::new(InternalAuthenticationProviderFactory),

            max_memtable_entry_count: 1_000_000,
            hash_collision_read_limit: 100,
            index: None,
            index_cache_depth: 16,
            index_bitness_version: 2,
            verify_db_hash: false,
            unsafe_ignore_hard_deletes: false,
            always_keep_scavenged: false,
            disable_scavenge_merging: false,
            scavenge_history_max_age: 30,

            worker_threads: 5,
            reader_threads_count: 4,
            node_priority: 0,
            start_standard_projections: false,
            better_ordering: false,
            stats_period: Duration::from_secs(30),
            stats_storage: StatsStorage::Stream,
            enable_histograms: false,
            additional_consumer_strategies: Vec::new(),

            admin_on_public: true,
            stats_on_public: true,
            gossip_on_public: true,
        }
    }
}

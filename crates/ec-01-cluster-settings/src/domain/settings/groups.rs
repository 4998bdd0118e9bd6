//! Validated settings, grouped by the subsystem that reads them.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::types::{Certificate, GossipTiming, HeartbeatTiming, StatsStorage};
use crate::ports::AuthenticationProviderFactory;

/// Read by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub internal_prefixes: Vec<String>,
    pub external_prefixes: Vec<String>,
    pub enable_trusted_auth: bool,
    pub disable_http_caching: bool,
    pub log_http_requests: bool,
}

/// Replication, gossip and heartbeat timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSettings {
    pub prepare_timeout: Duration,
    pub commit_timeout: Duration,
    pub min_flush_delay: Duration,
    pub gossip: GossipTiming,
    pub internal_heartbeat: HeartbeatTiming,
    pub external_heartbeat: HeartbeatTiming,
}

/// Read by the transport and security layers.
#[derive(Debug, Clone)]
pub struct SecuritySettings {
    pub use_ssl: bool,
    pub disable_insecure_tcp: bool,
    pub ssl_target_host: Option<String>,
    pub ssl_validate_server: bool,
    pub certificate: Option<Certificate>,
    pub authentication_provider_factory: Arc<dyn AuthenticationProviderFactory>,
}

/// Storage engine tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    pub max_memtable_entry_count: usize,
    pub hash_collision_read_limit: usize,
    /// Index directory; `None` keeps the index beside the database.
    pub index: Option<PathBuf>,
    pub index_cache_depth: u32,
    pub index_bitness_version: u8,
    pub verify_db_hash: bool,
    pub unsafe_ignore_hard_deletes: bool,
    pub always_keep_scavenged: bool,
    pub disable_scavenge_merging: bool,
    /// Days of scavenge history to keep.
    pub scavenge_history_max_age: u32,
}

/// Worker pools, statistics and miscellaneous node behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationalSettings {
    pub worker_threads: usize,
    pub reader_threads_count: usize,
    /// Higher priority nodes are preferred in leader elections.
    pub node_priority: i32,
    pub start_standard_projections: bool,
    pub better_ordering: bool,
    pub stats_period: Duration,
    pub stats_storage: StatsStorage,
    pub enable_histograms: bool,
    /// Names of extra persistent subscription consumer strategies.
    pub additional_consumer_strategies: Vec<String>,
}

//! # Cluster Settings
//!
//! The validated, immutable settings bundle a node is started with.
//!
//! Built exactly once during bootstrap from a [`ClusterSettingsInput`].
//! Construction either yields a fully checked value or the first violated
//! invariant; a node with invalid settings must not start. After that the
//! value is read-only and can be shared across threads without locking,
//! except for [`PublicExposure`], which is deliberately mutable and carries
//! its own lock.

mod discovery;
mod display;
mod exposure;
mod groups;
mod input;
mod quorum;
mod validation;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::advertise::GossipAdvertisement;
use crate::domain::identity::NodeIdentity;
use crate::domain::types::{ConfigurationError, Endpoint, EndpointRole, EndpointSet, InstanceId, Interface};

pub use discovery::{DiscoveryMode, DiscoverySettings};
pub use exposure::{ExposureFlags, PublicExposure};
pub use groups::{HttpSettings, OperationalSettings, SecuritySettings, StorageSettings, TimingSettings};
pub use input::ClusterSettingsInput;
pub use quorum::{QuorumHealth, QuorumSettings};
pub use validation::validate;

/// Validated cluster replication settings.
#[derive(Debug, Clone)]
pub struct ClusterSettings {
    node: NodeIdentity,
    gossip_advertise: GossipAdvertisement,
    http: HttpSettings,
    discovery: DiscoverySettings,
    quorum: QuorumSettings,
    timing: TimingSettings,
    security: SecuritySettings,
    storage: StorageSettings,
    operational: OperationalSettings,
    exposure: Arc<PublicExposure>,
}

impl ClusterSettings {
    /// Validate `input` and build the settings.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, checked in this order: identity
    /// and mandatory endpoints, secure endpoint certificate, positive counts,
    /// discovery data source, SSL target host, ack counts within cluster size.
    pub fn build(input: ClusterSettingsInput) -> Result<Self, ConfigurationError> {
        if let Some(first) = validate(&input).into_iter().next() {
            return Err(first);
        }

        let instance_id = InstanceId::new(input.instance_id)?;
        let endpoints = EndpointSet {
            internal_tcp: required(input.internal_tcp, EndpointRole::InternalTcp)?,
            internal_secure_tcp: input.internal_secure_tcp,
            external_tcp: required(input.external_tcp, EndpointRole::ExternalTcp)?,
            external_secure_tcp: input.external_secure_tcp,
            internal_http: required(input.internal_http, EndpointRole::InternalHttp)?,
            external_http: required(input.external_http, EndpointRole::ExternalHttp)?,
        };

        let http = HttpSettings {
            internal_prefixes: input
                .int_http_prefixes
                .ok_or(ConfigurationError::MissingHttpPrefixes {
                    interface: Interface::Internal,
                })?,
            external_prefixes: input
                .ext_http_prefixes
                .ok_or(ConfigurationError::MissingHttpPrefixes {
                    interface: Interface::External,
                })?,
            enable_trusted_auth: input.enable_trusted_auth,
            disable_http_caching: input.disable_http_caching,
            log_http_requests: input.log_http_requests,
        };

        let gossip_advertise = GossipAdvertisement::new(endpoints)
            .with_internal_ip(input.advertise_internal_ip)
            .with_external_ip(input.advertise_external_ip)
            .with_internal_http_port(input.advertise_internal_http_port)
            .with_external_http_port(input.advertise_external_http_port);

        let settings = Self {
            node: NodeIdentity::new(instance_id, input.debug_index, endpoints),
            gossip_advertise,
            http,
            discovery: DiscoverySettings {
                discover_via_dns: input.discover_via_dns,
                cluster_dns: input.cluster_dns,
                gossip_seeds: input.gossip_seeds,
                gossip_on_single_node: input.gossip_on_single_node,
            },
            quorum: QuorumSettings {
                cluster_node_count: input.cluster_node_count,
                prepare_ack_count: input.prepare_ack_count,
                commit_ack_count: input.commit_ack_count,
            },
            timing: TimingSettings {
                prepare_timeout: input.prepare_timeout,
                commit_timeout: input.commit_timeout,
                min_flush_delay: input.min_flush_delay,
                gossip: input.gossip,
                internal_heartbeat: input.internal_heartbeat,
                external_heartbeat: input.external_heartbeat,
            },
            security: SecuritySettings {
                use_ssl: input.use_ssl,
                disable_insecure_tcp: input.disable_insecure_tcp,
                ssl_target_host: input.ssl_target_host,
                ssl_validate_server: input.ssl_validate_server,
                certificate: input.certificate,
                authentication_provider_factory: input.authentication_provider_factory,
            },
            storage: StorageSettings {
                max_memtable_entry_count: input.max_memtable_entry_count,
                hash_collision_read_limit: input.hash_collision_read_limit,
                index: input.index,
                index_cache_depth: input.index_cache_depth,
                index_bitness_version: input.index_bitness_version,
                verify_db_hash: input.verify_db_hash,
                unsafe_ignore_hard_deletes: input.unsafe_ignore_hard_deletes,
                always_keep_scavenged: input.always_keep_scavenged,
                disable_scavenge_merging: input.disable_scavenge_merging,
                scavenge_history_max_age: input.scavenge_history_max_age,
            },
            operational: OperationalSettings {
                worker_threads: input.worker_threads,
                reader_threads_count: input.reader_threads_count,
                node_priority: input.node_priority,
                start_standard_projections: input.start_standard_projections,
                better_ordering: input.better_ordering,
                stats_period: input.stats_period,
                stats_storage: input.stats_storage,
                enable_histograms: input.enable_histograms,
                additional_consumer_strategies: input.additional_consumer_strategies,
            },
            exposure: Arc::new(PublicExposure::new(ExposureFlags {
                admin_on_public: input.admin_on_public,
                stats_on_public: input.stats_on_public,
                gossip_on_public: input.gossip_on_public,
            })),
        };

        let health = settings.quorum_health();
        if !health.is_sanctioned() {
            warn!(
                cluster_node_count = settings.quorum.cluster_node_count,
                prepare_ack_count = settings.quorum.prepare_ack_count,
                commit_ack_count = settings.quorum.commit_ack_count,
                majority = settings.quorum.majority(),
                "Quorum thresholds are below majority; a network partition can commit conflicting writes"
            );
        }

        debug!(
            instance_id = %settings.node.instance_id(),
            cluster_node_count = settings.quorum.cluster_node_count,
            quorum = %health,
            "Cluster settings validated"
        );

        Ok(settings)
    }

    pub fn node(&self) -> &NodeIdentity {
        &self.node
    }

    pub fn gossip_advertise(&self) -> &GossipAdvertisement {
        &self.gossip_advertise
    }

    pub fn http(&self) -> &HttpSettings {
        &self.http
    }

    pub fn discovery(&self) -> &DiscoverySettings {
        &self.discovery
    }

    pub fn quorum(&self) -> &QuorumSettings {
        &self.quorum
    }

    pub fn timing(&self) -> &TimingSettings {
        &self.timing
    }

    pub fn security(&self) -> &SecuritySettings {
        &self.security
    }

    pub fn storage(&self) -> &StorageSettings {
        &self.storage
    }

    pub fn operational(&self) -> &OperationalSettings {
        &self.operational
    }

    /// Runtime-toggleable exposure flags, shared with the HTTP layer.
    pub fn exposure(&self) -> &Arc<PublicExposure> {
        &self.exposure
    }

    pub fn quorum_health(&self) -> QuorumHealth {
        self.quorum.assess(self.discovery.gossip_on_single_node)
    }
}

fn required(endpoint: Option<Endpoint>, role: EndpointRole) -> Result<Endpoint, ConfigurationError> {
    endpoint.ok_or(ConfigurationError::MissingEndpoint { role })
}

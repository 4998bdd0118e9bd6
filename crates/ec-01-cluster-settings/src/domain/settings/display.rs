//! Diagnostic dump of every setting, one `Name: value` pair per line.
//!
//! The certificate is rendered as its subject and thumbprint, and the
//! authentication provider as its kind.

use std::fmt::{self, Display};

use crate::domain::types::display_optional;

use super::ClusterSettings;

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn join<T: Display>(items: &[T], sep: &str) -> String {
    items.iter().map(T::to_string).collect::<Vec<_>>().join(sep)
}

impl Display for ClusterSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.node;
        let ep = node.endpoints();
        let adv = &self.gossip_advertise;
        let advertised = adv.advertised();
        let sec = &self.security;
        let timing = &self.timing;
        let storage = &self.storage;
        let ops = &self.operational;
        let exposure = self.exposure.snapshot();

        writeln!(f, "InstanceId: {}", node.instance_id())?;
        writeln!(f, "DebugIndex: {}", node.debug_index())?;
        writeln!(f, "InternalTcp: {}", ep.internal_tcp)?;
        writeln!(f, "InternalSecureTcp: {}", display_optional(ep.internal_secure_tcp))?;
        writeln!(f, "ExternalTcp: {}", ep.external_tcp)?;
        writeln!(f, "ExternalSecureTcp: {}", display_optional(ep.external_secure_tcp))?;
        writeln!(f, "InternalHttp: {}", ep.internal_http)?;
        writeln!(f, "ExternalHttp: {}", ep.external_http)?;
        writeln!(f, "AdvertiseInternalIp: {}", or_na(adv.advertise_internal_ip()))?;
        writeln!(f, "AdvertiseExternalIp: {}", or_na(adv.advertise_external_ip()))?;
        writeln!(f, "AdvertiseInternalHttpPort: {}", or_na(adv.advertise_internal_http_port()))?;
        writeln!(f, "AdvertiseExternalHttpPort: {}", or_na(adv.advertise_external_http_port()))?;
        writeln!(f, "AdvertisedInternalTcp: {}", advertised.internal_tcp)?;
        writeln!(
            f,
            "AdvertisedInternalSecureTcp: {}",
            display_optional(advertised.internal_secure_tcp)
        )?;
        writeln!(f, "AdvertisedExternalTcp: {}", advertised.external_tcp)?;
        writeln!(
            f,
            "AdvertisedExternalSecureTcp: {}",
            display_optional(advertised.external_secure_tcp)
        )?;
        writeln!(f, "AdvertisedInternalHttp: {}", advertised.internal_http)?;
        writeln!(f, "AdvertisedExternalHttp: {}", advertised.external_http)?;
        writeln!(f, "IntHttpPrefixes: {}", self.http.internal_prefixes.join(", "))?;
        writeln!(f, "ExtHttpPrefixes: {}", self.http.external_prefixes.join(", "))?;
        writeln!(f, "EnableTrustedAuth: {}", self.http.enable_trusted_auth)?;
        match &sec.certificate {
            Some(cert) => writeln!(f, "Certificate: {cert}")?,
            None => writeln!(f, "Certificate: n/a")?,
        }
        writeln!(f, "LogHttpRequests: {}", self.http.log_http_requests)?;
        writeln!(f, "DisableHttpCaching: {}", self.http.disable_http_caching)?;
        writeln!(f, "WorkerThreads: {}", ops.worker_threads)?;
        writeln!(f, "ReaderThreadsCount: {}", ops.reader_threads_count)?;
        writeln!(f, "DiscoverViaDns: {}", self.discovery.discover_via_dns)?;
        writeln!(f, "ClusterDns: {}", self.discovery.cluster_dns)?;
        writeln!(f, "GossipSeeds: {}", join(&self.discovery.gossip_seeds, ","))?;
        writeln!(f, "GossipOnSingleNode: {}", self.discovery.gossip_on_single_node)?;
        writeln!(f, "ClusterNodeCount: {}", self.quorum.cluster_node_count)?;
        writeln!(f, "PrepareAckCount: {}", self.quorum.prepare_ack_count)?;
        writeln!(f, "CommitAckCount: {}", self.quorum.commit_ack_count)?;
        writeln!(f, "QuorumHealth: {}", self.quorum_health())?;
        writeln!(f, "MinFlushDelay: {:?}", timing.min_flush_delay)?;
        writeln!(f, "PrepareTimeout: {:?}", timing.prepare_timeout)?;
        writeln!(f, "CommitTimeout: {:?}", timing.commit_timeout)?;
        writeln!(f, "UseSsl: {}", sec.use_ssl)?;
        writeln!(f, "DisableInsecureTcp: {}", sec.disable_insecure_tcp)?;
        writeln!(f, "SslTargetHost: {}", sec.ssl_target_host.as_deref().unwrap_or("n/a"))?;
        writeln!(f, "SslValidateServer: {}", sec.ssl_validate_server)?;
        writeln!(f, "StatsPeriod: {:?}", ops.stats_period)?;
        writeln!(f, "StatsStorage: {}", ops.stats_storage)?;
        writeln!(
            f,
            "AuthenticationProviderFactory Type: {}",
            sec.authentication_provider_factory.kind()
        )?;
        writeln!(f, "NodePriority: {}", ops.node_priority)?;
        writeln!(f, "GossipInterval: {:?}", timing.gossip.interval)?;
        writeln!(f, "GossipAllowedTimeDifference: {:?}", timing.gossip.allowed_time_difference)?;
        writeln!(f, "GossipTimeout: {:?}", timing.gossip.timeout)?;
        writeln!(f, "IntTcpHeartbeatInterval: {:?}", timing.internal_heartbeat.interval)?;
        writeln!(f, "IntTcpHeartbeatTimeout: {:?}", timing.internal_heartbeat.timeout)?;
        writeln!(f, "ExtTcpHeartbeatInterval: {:?}", timing.external_heartbeat.interval)?;
        writeln!(f, "ExtTcpHeartbeatTimeout: {:?}", timing.external_heartbeat.timeout)?;
        writeln!(f, "EnableHistograms: {}", ops.enable_histograms)?;
        writeln!(f, "StartStandardProjections: {}", ops.start_standard_projections)?;
        writeln!(f, "BetterOrdering: {}", ops.better_ordering)?;
        writeln!(
            f,
            "AdditionalConsumerStrategies: {}",
            ops.additional_consumer_strategies.join(", ")
        )?;
        writeln!(
            f,
            "Index: {}",
            storage
                .index
                .as_ref()
                .map_or_else(|| "n/a".to_string(), |p| p.display().to_string())
        )?;
        writeln!(f, "MaxMemtableEntryCount: {}", storage.max_memtable_entry_count)?;
        writeln!(f, "HashCollisionReadLimit: {}", storage.hash_collision_read_limit)?;
        writeln!(f, "IndexCacheDepth: {}", storage.index_cache_depth)?;
        writeln!(f, "IndexBitnessVersion: {}", storage.index_bitness_version)?;
        writeln!(f, "VerifyDbHash: {}", storage.verify_db_hash)?;
        writeln!(f, "UnsafeIgnoreHardDeletes: {}", storage.unsafe_ignore_hard_deletes)?;
        writeln!(f, "AlwaysKeepScavenged: {}", storage.always_keep_scavenged)?;
        writeln!(f, "DisableScavengeMerging: {}", storage.disable_scavenge_merging)?;
        writeln!(f, "ScavengeHistoryMaxAge: {}", storage.scavenge_history_max_age)?;
        writeln!(f, "AdminOnPublic: {}", exposure.admin_on_public)?;
        writeln!(f, "StatsOnPublic: {}", exposure.stats_on_public)?;
        write!(f, "GossipOnPublic: {}", exposure.gossip_on_public)
    }
}

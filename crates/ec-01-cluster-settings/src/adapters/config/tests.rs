use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::*;
use crate::domain::{ClusterSettings, StatsStorage};

const MINIMAL: &str = r#"
[node]
instance_id = "8f3b1f1e-6c0e-4d8e-9a55-1f0d5c2f7a10"

[endpoints]
internal_tcp = "10.0.0.1:1112"
external_tcp = "192.0.2.1:1113"
internal_http = "10.0.0.1:2112"
external_http = "192.0.2.1:2113"

[discovery]
cluster_dns = "cluster.internal"

[replication]
cluster_node_count = 3
prepare_ack_count = 2
commit_ack_count = 2
"#;

fn parse(content: &str) -> ClusterSettingsInput {
    TomlConfigProvider::parse(content).unwrap().into_input()
}

#[test]
fn test_minimal_file_builds() {
    let input = parse(MINIMAL);

    assert_eq!(input.instance_id.to_string(), "8f3b1f1e-6c0e-4d8e-9a55-1f0d5c2f7a10");
    assert_eq!(input.internal_tcp, Some(SocketAddr::from(([10, 0, 0, 1], 1112))));
    assert_eq!(input.cluster_node_count, 3);

    let settings = ClusterSettings::build(input).unwrap();
    assert_eq!(settings.quorum().prepare_ack_count, 2);
}

#[test]
fn test_missing_keys_keep_defaults() {
    let input = parse(MINIMAL);
    let defaults = ClusterSettingsInput::default();

    assert_eq!(input.worker_threads, defaults.worker_threads);
    assert_eq!(input.prepare_timeout, Duration::from_millis(2000));
    assert_eq!(input.gossip.timeout, Duration::from_millis(2500));
    assert_eq!(input.int_http_prefixes, Some(Vec::new()));
    assert_eq!(input.stats_storage, StatsStorage::Stream);
    assert!(input.discover_via_dns);
}

#[test]
fn test_empty_file_generates_instance_id_and_fails_validation() {
    let input = parse("");

    assert!(!input.instance_id.is_nil());
    assert!(input.internal_tcp.is_none());
    assert!(ClusterSettings::build(input).is_err());
}

#[test]
fn test_durations_and_sections() {
    let content = format!(
        "{MINIMAL}
[gossip]
interval_ms = 500
allowed_time_difference_ms = 30000

[heartbeat]
external_timeout_ms = 4000

[stats]
period_secs = 10
storage = \"StreamAndFile\"

[exposure]
admin_on_public = false
"
    );
    let input = parse(&content);

    assert_eq!(input.gossip.interval, Duration::from_millis(500));
    assert_eq!(input.gossip.allowed_time_difference, Duration::from_secs(30));
    assert_eq!(input.external_heartbeat.timeout, Duration::from_secs(4));
    assert_eq!(input.external_heartbeat.interval, Duration::from_millis(2000));
    assert_eq!(input.stats_period, Duration::from_secs(10));
    assert_eq!(input.stats_storage, StatsStorage::StreamAndFile);
    assert!(!input.admin_on_public);
    assert!(input.gossip_on_public);
}

#[test]
fn test_zero_port_override_means_none() {
    let content = format!(
        "{MINIMAL}
[advertise]
external_ip = \"203.0.113.7\"
internal_http_port = 0
external_http_port = 443
"
    );
    let input = parse(&content);

    assert_eq!(input.advertise_external_ip, Some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7))));
    assert_eq!(input.advertise_internal_http_port, None);
    assert_eq!(input.advertise_external_http_port, Some(443));
}

#[test]
fn test_seed_list() {
    let content = MINIMAL.replace(
        "cluster_dns = \"cluster.internal\"",
        "discover_via_dns = false\ngossip_seeds = [\"10.0.0.2:2112\", \"10.0.0.3:2112\"]",
    );
    let input = parse(&content);

    assert!(!input.discover_via_dns);
    assert_eq!(input.gossip_seeds.len(), 2);
    assert!(ClusterSettings::build(input).is_ok());
}

#[test]
fn test_malformed_endpoint_is_rejected() {
    let content = MINIMAL.replace("10.0.0.1:1112", "10.0.0.1");
    let err = TomlConfigProvider::parse(&content).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidValue { ref field, .. } if field == "endpoints.internal_tcp"
    ));
}

#[test]
fn test_malformed_seed_is_rejected() {
    let content = MINIMAL.replace(
        "cluster_dns = \"cluster.internal\"",
        "gossip_seeds = [\"not-an-endpoint\"]",
    );

    assert!(matches!(
        TomlConfigProvider::parse(&content),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_bad_instance_id_is_rejected() {
    let content = MINIMAL.replace("8f3b1f1e-6c0e-4d8e-9a55-1f0d5c2f7a10", "node-1");
    assert!(matches!(
        TomlConfigProvider::parse(&content),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_unknown_stats_storage_is_rejected() {
    let content = format!("{MINIMAL}\n[stats]\nstorage = \"Database\"\n");
    assert!(matches!(
        TomlConfigProvider::parse(&content),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_only_internal_authentication_is_supported() {
    let ok = format!("{MINIMAL}\n[security]\nauthentication = \"internal\"\n");
    assert!(TomlConfigProvider::parse(&ok).is_ok());

    let other = format!("{MINIMAL}\n[security]\nauthentication = \"ldaps\"\n");
    assert!(TomlConfigProvider::parse(&other).is_err());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    assert!(matches!(
        TomlConfigProvider::parse("[node\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_certificate_file_is_io_error() {
    let content = format!(
        "{MINIMAL}\n[security]\ncertificate_path = \"/nonexistent/eventcluster/node.p12\"\n"
    );
    assert!(matches!(
        TomlConfigProvider::parse(&content),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_static_provider_returns_its_input() {
    let input = parse(MINIMAL);
    let provider = StaticConfigProvider::new(input.clone());

    assert_eq!(provider.cluster_settings_input().instance_id, input.instance_id);
}

#[test]
fn test_configuration_error_converts() {
    let err: ConfigError = ConfigurationError::MissingClusterDns.into();
    assert_eq!(err.to_string(), ConfigurationError::MissingClusterDns.to_string());
}

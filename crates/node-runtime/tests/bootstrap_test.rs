//! # Bootstrap Integration Tests
//!
//! File loading, environment overrides and fail-fast validation, end to end.

use std::collections::HashMap;
use std::io::Write;

use ec_01_cluster_settings::{ClusterSettingsApi, ConfigError, DiscoveryMode, Invariant};
use node_runtime::{load_input, NodeRuntime};
use tempfile::NamedTempFile;

const NODE_TOML: &str = r#"
[endpoints]
internal_tcp = "10.0.0.1:1112"
external_tcp = "192.0.2.1:1113"
internal_http = "10.0.0.1:2112"
external_http = "192.0.2.1:2113"

[replication]
cluster_node_count = 3
prepare_ack_count = 2
commit_ack_count = 2
"#;

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_file_without_discovery_source_refuses_to_start() {
    let file = settings_file(NODE_TOML);
    let input = load_input(Some(file.path()), env(&[])).unwrap();

    match NodeRuntime::new(input) {
        Err(ConfigError::Configuration(e)) => assert_eq!(e.invariant(), Invariant::Discovery),
        other => panic!("expected discovery error, got {other:?}"),
    }
}

#[test]
fn test_environment_supplies_cluster_dns() {
    let file = settings_file(NODE_TOML);
    let input = load_input(Some(file.path()), env(&[("EC_CLUSTER_DNS", "cluster.internal")])).unwrap();

    let runtime = NodeRuntime::new(input).unwrap();
    assert_eq!(
        runtime.settings().settings().discovery().mode(),
        DiscoveryMode::Dns {
            cluster_dns: "cluster.internal"
        }
    );
}

#[test]
fn test_environment_switches_to_seed_discovery() {
    let file = settings_file(NODE_TOML);
    let input = load_input(
        Some(file.path()),
        env(&[
            ("EC_DISCOVER_VIA_DNS", "false"),
            ("EC_GOSSIP_SEEDS", "10.0.0.2:2112,10.0.0.3:2112"),
        ]),
    )
    .unwrap();

    let runtime = NodeRuntime::new(input).unwrap();
    match runtime.settings().settings().discovery().mode() {
        DiscoveryMode::Seeds { seeds } => assert_eq!(seeds.len(), 2),
        other => panic!("expected seed discovery, got {other:?}"),
    }
}

#[test]
fn test_environment_cluster_size_is_validated_against_acks() {
    let file = settings_file(NODE_TOML);
    let input = load_input(
        Some(file.path()),
        env(&[("EC_CLUSTER_DNS", "cluster.internal"), ("EC_CLUSTER_SIZE", "1")]),
    )
    .unwrap();

    match NodeRuntime::new(input) {
        Err(ConfigError::Configuration(e)) => assert_eq!(e.invariant(), Invariant::QuorumBounds),
        other => panic!("expected quorum bounds error, got {other:?}"),
    }
}

#[test]
fn test_advertised_address_from_environment() {
    let file = settings_file(NODE_TOML);
    let input = load_input(
        Some(file.path()),
        env(&[
            ("EC_CLUSTER_DNS", "cluster.internal"),
            ("EC_ADVERTISE_EXTERNAL_IP", "203.0.113.7"),
            ("EC_ADVERTISE_EXTERNAL_HTTP_PORT", "443"),
        ]),
    )
    .unwrap();

    let runtime = NodeRuntime::new(input).unwrap();
    let advertised = runtime.settings().advertised_endpoints();

    assert_eq!(advertised.external_http.to_string(), "203.0.113.7:443");
    assert_eq!(advertised.external_tcp.to_string(), "203.0.113.7:1113");
    assert_eq!(advertised.internal_http.to_string(), "10.0.0.1:2112");
}

#[test]
fn test_malformed_file_is_a_load_error() {
    let file = settings_file("[endpoints]\ninternal_tcp = \"nowhere\"\n");

    assert!(matches!(
        load_input(Some(file.path()), env(&[])),
        Err(ConfigError::InvalidValue { .. })
    ));
}

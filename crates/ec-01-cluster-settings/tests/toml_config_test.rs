//! Loading settings from files on disk.

use std::io::Write;

use ec_01_cluster_settings::{
    ClusterSettings, ClusterSettingsApi, ClusterSettingsService, ConfigError, ConfigurationError,
    Invariant, TomlConfigProvider,
};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

const NODE_TOML: &str = r#"
[node]
instance_id = "8f3b1f1e-6c0e-4d8e-9a55-1f0d5c2f7a10"
debug_index = 2

[endpoints]
internal_tcp = "10.0.0.1:1112"
internal_secure_tcp = "10.0.0.1:1114"
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

fn write_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn toml_path(path: &std::path::Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}

#[test]
fn test_secure_endpoint_with_certificate_file_builds() {
    let cert = write_file(b"-----BEGIN CERTIFICATE----- not a real certificate");
    let config = write_file(
        format!(
            "{NODE_TOML}\n[security]\ncertificate_path = \"{}\"\ncertificate_subject = \"CN=node1\"\n",
            toml_path(cert.path())
        )
        .as_bytes(),
    );

    let provider = TomlConfigProvider::load(config.path()).unwrap();
    let service = ClusterSettingsService::from_provider(&provider).unwrap();

    let certificate = service.settings().security().certificate.as_ref().unwrap();
    let expected = hex::encode(Sha256::digest(b"-----BEGIN CERTIFICATE----- not a real certificate"));
    assert_eq!(certificate.subject(), "CN=node1");
    assert_eq!(certificate.thumbprint(), expected);

    let secure = "10.0.0.1:1114".parse().unwrap();
    assert!(service.is_self(Some(&secure)));
}

#[test]
fn test_secure_endpoint_without_certificate_is_rejected() {
    let config = write_file(NODE_TOML.as_bytes());

    let provider = TomlConfigProvider::load(config.path()).unwrap();
    let err = ClusterSettingsService::from_provider(&provider).unwrap_err();

    assert_eq!(err.invariant(), Invariant::SecureEndpointCertificate);
}

#[test]
fn test_dump_never_contains_certificate_bytes() {
    let cert = write_file(b"SECRET-KEY-MATERIAL");
    let config = write_file(
        format!(
            "{NODE_TOML}\n[security]\ncertificate_path = \"{}\"\n",
            toml_path(cert.path())
        )
        .as_bytes(),
    );

    let input = TomlConfigProvider::load(config.path()).unwrap().into_input();
    let dump = ClusterSettings::build(input).unwrap().to_string();

    assert!(dump.contains("Certificate: [Subject] "));
    assert!(!dump.contains("SECRET-KEY-MATERIAL"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TomlConfigProvider::load(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invariant_error_converts_into_config_error() {
    let content = NODE_TOML
        .replace("internal_secure_tcp = \"10.0.0.1:1114\"\n", "")
        .replace("prepare_ack_count = 2", "prepare_ack_count = 4");
    let config = write_file(content.as_bytes());
    let input = TomlConfigProvider::load(config.path()).unwrap().into_input();

    let result: Result<ClusterSettings, ConfigError> =
        ClusterSettings::build(input).map_err(ConfigError::from);

    assert!(matches!(
        result,
        Err(ConfigError::Configuration(ConfigurationError::AckCountExceedsClusterSize {
            ack_count: 4,
            cluster_node_count: 3,
            ..
        }))
    ));
}

//! Construction-time invariant checks.
//!
//! Pure function over [`ClusterSettingsInput`]; reports every violation in
//! invariant order so the first entry is the one construction fails with.

use crate::domain::types::{ConfigurationError, EndpointRole, Interface};

use super::ClusterSettingsInput;

/// All invariant violations in `input`, in check order.
pub fn validate(input: &ClusterSettingsInput) -> Vec<ConfigurationError> {
    let mut errors = Vec::new();

    check_identity(input, &mut errors);
    check_certificate(input, &mut errors);
    check_positive_counts(input, &mut errors);
    check_discovery(input, &mut errors);
    check_ssl(input, &mut errors);
    check_quorum_bounds(input, &mut errors);

    errors
}

fn check_identity(input: &ClusterSettingsInput, errors: &mut Vec<ConfigurationError>) {
    if input.instance_id.is_nil() {
        errors.push(ConfigurationError::EmptyInstanceId);
    }

    let required = [
        (EndpointRole::InternalTcp, input.internal_tcp),
        (EndpointRole::ExternalTcp, input.external_tcp),
        (EndpointRole::InternalHttp, input.internal_http),
        (EndpointRole::ExternalHttp, input.external_http),
    ];
    for (role, endpoint) in required {
        if endpoint.is_none() {
            errors.push(ConfigurationError::MissingEndpoint { role });
        }
    }

    if input.int_http_prefixes.is_none() {
        errors.push(ConfigurationError::MissingHttpPrefixes {
            interface: Interface::Internal,
        });
    }
    if input.ext_http_prefixes.is_none() {
        errors.push(ConfigurationError::MissingHttpPrefixes {
            interface: Interface::External,
        });
    }
}

fn check_certificate(input: &ClusterSettingsInput, errors: &mut Vec<ConfigurationError>) {
    if input.certificate.is_some() {
        return;
    }
    let secure = [
        (EndpointRole::InternalSecureTcp, input.internal_secure_tcp),
        (EndpointRole::ExternalSecureTcp, input.external_secure_tcp),
    ];
    if let Some((role, _)) = secure.into_iter().find(|(_, ep)| ep.is_some()) {
        errors.push(ConfigurationError::CertificateRequired { role });
    }
}

fn check_positive_counts(input: &ClusterSettingsInput, errors: &mut Vec<ConfigurationError>) {
    let counts = [
        ("worker_threads", input.worker_threads),
        ("cluster_node_count", input.cluster_node_count),
        ("prepare_ack_count", input.prepare_ack_count),
        ("commit_ack_count", input.commit_ack_count),
    ];
    for (field, value) in counts {
        if value == 0 {
            errors.push(ConfigurationError::NotPositive { field, value });
        }
    }
}

fn check_discovery(input: &ClusterSettingsInput, errors: &mut Vec<ConfigurationError>) {
    if input.discover_via_dns {
        if input.cluster_dns.trim().is_empty() {
            errors.push(ConfigurationError::MissingClusterDns);
        }
    } else if input.gossip_seeds.is_empty() {
        errors.push(ConfigurationError::MissingGossipSeeds);
    }
}

fn check_ssl(input: &ClusterSettingsInput, errors: &mut Vec<ConfigurationError>) {
    let has_host = input
        .ssl_target_host
        .as_deref()
        .is_some_and(|h| !h.trim().is_empty());
    if input.use_ssl && !has_host {
        errors.push(ConfigurationError::MissingSslTargetHost);
    }
}

fn check_quorum_bounds(input: &ClusterSettingsInput, errors: &mut Vec<ConfigurationError>) {
    let n = input.cluster_node_count;
    if n == 0 {
        // Already reported as non-positive.
        return;
    }
    let acks = [
        ("prepare_ack_count", input.prepare_ack_count),
        ("commit_ack_count", input.commit_ack_count),
    ];
    for (field, ack_count) in acks {
        if ack_count > n {
            errors.push(ConfigurationError::AckCountExceedsClusterSize {
                field,
                ack_count,
                cluster_node_count: n,
            });
        }
    }
}

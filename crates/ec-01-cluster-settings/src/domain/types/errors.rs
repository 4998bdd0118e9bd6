//! Domain Errors for Cluster Settings
//!
//! Every variant is fatal: a node whose settings fail validation must not start.

use thiserror::Error;

use super::entities::{EndpointRole, Interface};

/// The construction-time invariant a [`ConfigurationError`] violates.
///
/// Listed in the order validation checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Invariant {
    /// Instance id, mandatory endpoints and HTTP prefixes are present.
    Identity,
    /// A secure TCP endpoint implies a TLS certificate.
    SecureEndpointCertificate,
    /// Worker and quorum counts are strictly positive.
    PositiveCounts,
    /// The active discovery mechanism has a data source.
    Discovery,
    /// SSL implies a target host.
    SslTargetHost,
    /// Ack counts do not exceed the cluster size.
    QuorumBounds,
}

/// A violated settings invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("instance id must not be empty")]
    EmptyInstanceId,

    #[error("{role} endpoint is required")]
    MissingEndpoint { role: EndpointRole },

    #[error("{interface} HTTP prefixes are required")]
    MissingHttpPrefixes { interface: Interface },

    #[error("a certificate is required when the {role} endpoint is set")]
    CertificateRequired { role: EndpointRole },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: usize },

    #[error("Either DNS Discovery must be disabled (and seeds specified), or a cluster DNS name must be provided.")]
    MissingClusterDns,

    #[error("DNS discovery is disabled but no gossip seeds were provided")]
    MissingGossipSeeds,

    #[error("an SSL target host is required when SSL is enabled")]
    MissingSslTargetHost,

    #[error("{field} ({ack_count}) exceeds cluster node count ({cluster_node_count})")]
    AckCountExceedsClusterSize {
        field: &'static str,
        ack_count: usize,
        cluster_node_count: usize,
    },
}

impl ConfigurationError {
    /// The invariant this error reports.
    pub fn invariant(&self) -> Invariant {
        match self {
            Self::EmptyInstanceId | Self::MissingEndpoint { .. } | Self::MissingHttpPrefixes { .. } => {
                Invariant::Identity
            }
            Self::CertificateRequired { .. } => Invariant::SecureEndpointCertificate,
            Self::NotPositive { .. } => Invariant::PositiveCounts,
            Self::MissingClusterDns | Self::MissingGossipSeeds => Invariant::Discovery,
            Self::MissingSslTargetHost => Invariant::SslTargetHost,
            Self::AckCountExceedsClusterSize { .. } => Invariant::QuorumBounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = ConfigurationError::MissingEndpoint {
            role: EndpointRole::ExternalHttp,
        };
        assert_eq!(err.to_string(), "external_http endpoint is required");

        let err = ConfigurationError::NotPositive {
            field: "worker_threads",
            value: 0,
        };
        assert_eq!(err.to_string(), "worker_threads must be positive, got 0");

        let err = ConfigurationError::AckCountExceedsClusterSize {
            field: "prepare_ack_count",
            ack_count: 4,
            cluster_node_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "prepare_ack_count (4) exceeds cluster node count (3)"
        );
    }

    #[test]
    fn test_invariant_mapping() {
        assert_eq!(ConfigurationError::EmptyInstanceId.invariant(), Invariant::Identity);
        assert_eq!(
            ConfigurationError::MissingHttpPrefixes {
                interface: Interface::Internal
            }
            .invariant(),
            Invariant::Identity
        );
        assert_eq!(ConfigurationError::MissingGossipSeeds.invariant(), Invariant::Discovery);
        assert_eq!(
            ConfigurationError::MissingSslTargetHost.invariant(),
            Invariant::SslTargetHost
        );
    }
}

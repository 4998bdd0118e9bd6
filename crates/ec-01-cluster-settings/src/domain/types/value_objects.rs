//! Value Objects for Cluster Settings

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use sha2::{Digest, Sha256};

use crate::ports::AuthenticationProviderFactory;

/// TLS certificate used by the secure TCP listeners.
///
/// Only the subject and a SHA-256 thumbprint are ever rendered; the encoded
/// certificate bytes stay out of `Debug` and `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct Certificate {
    subject: String,
    thumbprint: String,
    encoded: Arc<[u8]>,
}

impl Certificate {
    /// Wrap an encoded certificate (PEM or DER) under a subject name.
    pub fn new(subject: impl Into<String>, encoded: Vec<u8>) -> Self {
        let thumbprint = hex::encode(Sha256::digest(&encoded));
        Self {
            subject: subject.into(),
            thumbprint,
            encoded: encoded.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Lowercase hex SHA-256 of the encoded certificate.
    pub fn thumbprint(&self) -> &str {
        &self.thumbprint
    }

    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Certificate")
            .field("subject", &self.subject)
            .field("thumbprint", &self.thumbprint)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Subject] {} [Thumbprint] {}", self.subject, self.thumbprint)
    }
}

/// Where periodic node statistics are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsStorage {
    None,
    #[default]
    Stream,
    File,
    StreamAndFile,
}

impl fmt::Display for StatsStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Stream => "Stream",
            Self::File => "File",
            Self::StreamAndFile => "StreamAndFile",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for StatsStorage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "stream" => Ok(Self::Stream),
            "file" => Ok(Self::File),
            "streamandfile" | "stream_and_file" => Ok(Self::StreamAndFile),
            other => Err(format!("unknown stats storage '{other}'")),
        }
    }
}

/// Gossip round timing shared by every node in the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GossipTiming {
    /// Delay between gossip rounds.
    pub interval: Duration,
    /// Maximum clock skew tolerated between gossiping nodes.
    pub allowed_time_difference: Duration,
    /// How long to wait for a gossip response.
    pub timeout: Duration,
}

impl Default for GossipTiming {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            allowed_time_difference: Duration::from_millis(60_000),
            timeout: Duration::from_millis(2500),
        }
    }
}

/// TCP heartbeat timing for one interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatTiming {
    pub interval: Duration,
    pub timeout: Duration,
}

impl HeartbeatTiming {
    pub const INTERNAL_DEFAULT: Self = Self {
        interval: Duration::from_millis(700),
        timeout: Duration::from_millis(700),
    };

    pub const EXTERNAL_DEFAULT: Self = Self {
        interval: Duration::from_millis(2000),
        timeout: Duration::from_millis(1000),
    };
}

/// Factory for the built-in user store.
///
/// The default when nothing else is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternalAuthenticationProviderFactory;

impl AuthenticationProviderFactory for InternalAuthenticationProviderFactory {
    fn kind(&self) -> &'static str {
        "internal"
    }
}

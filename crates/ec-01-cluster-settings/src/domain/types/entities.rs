//! Core Domain Entities for Cluster Settings
//!
//! Instance identifiers and the six network roles a node answers to.

use std::fmt;
use std::net::SocketAddr;

use uuid::Uuid;

use super::errors::ConfigurationError;

/// A network endpoint observed on the wire or bound by a listener.
pub type Endpoint = SocketAddr;

/// Permanent identifier of a node process.
///
/// Never nil: the zero UUID is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Wrap an existing UUID, rejecting the nil value.
    pub fn new(id: Uuid) -> Result<Self, ConfigurationError> {
        if id.is_nil() {
            return Err(ConfigurationError::EmptyInstanceId);
        }
        Ok(Self(id))
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.braced())
    }
}

/// Network interface an endpoint is bound on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    /// Cluster-internal traffic (replication, gossip).
    Internal,
    /// Client-facing traffic.
    External,
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::External => write!(f, "external"),
        }
    }
}

/// One of the six addressable roles of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointRole {
    InternalTcp,
    InternalSecureTcp,
    ExternalTcp,
    ExternalSecureTcp,
    InternalHttp,
    ExternalHttp,
}

impl EndpointRole {
    /// All roles, in the order they are reported in diagnostics.
    pub const ALL: [EndpointRole; 6] = [
        Self::InternalTcp,
        Self::InternalSecureTcp,
        Self::ExternalTcp,
        Self::ExternalSecureTcp,
        Self::InternalHttp,
        Self::ExternalHttp,
    ];

    pub fn interface(&self) -> Interface {
        match self {
            Self::InternalTcp | Self::InternalSecureTcp | Self::InternalHttp => Interface::Internal,
            Self::ExternalTcp | Self::ExternalSecureTcp | Self::ExternalHttp => Interface::External,
        }
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, Self::InternalSecureTcp | Self::ExternalSecureTcp)
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Self::InternalHttp | Self::ExternalHttp)
    }

    /// Secure roles may be left unbound; the rest are mandatory.
    pub fn is_required(&self) -> bool {
        !self.is_secure()
    }
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InternalTcp => "internal_tcp",
            Self::InternalSecureTcp => "internal_secure_tcp",
            Self::ExternalTcp => "external_tcp",
            Self::ExternalSecureTcp => "external_secure_tcp",
            Self::InternalHttp => "internal_http",
            Self::ExternalHttp => "external_http",
        };
        f.write_str(name)
    }
}

/// The six endpoints a node is reachable on.
///
/// Plain TCP and HTTP endpoints are always present; secure TCP endpoints are
/// optional and their presence means secure transport is enabled for that
/// interface. Endpoints are not required to be distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointSet {
    pub internal_tcp: Endpoint,
    pub internal_secure_tcp: Option<Endpoint>,
    pub external_tcp: Endpoint,
    pub external_secure_tcp: Option<Endpoint>,
    pub internal_http: Endpoint,
    pub external_http: Endpoint,
}

impl EndpointSet {
    /// Endpoint bound for `role`, if any.
    pub fn get(&self, role: EndpointRole) -> Option<Endpoint> {
        match role {
            EndpointRole::InternalTcp => Some(self.internal_tcp),
            EndpointRole::InternalSecureTcp => self.internal_secure_tcp,
            EndpointRole::ExternalTcp => Some(self.external_tcp),
            EndpointRole::ExternalSecureTcp => self.external_secure_tcp,
            EndpointRole::InternalHttp => Some(self.internal_http),
            EndpointRole::ExternalHttp => Some(self.external_http),
        }
    }

    /// Every bound endpoint paired with its role, absent secure slots skipped.
    pub fn iter(&self) -> impl Iterator<Item = (EndpointRole, Endpoint)> + '_ {
        EndpointRole::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|ep| (role, ep)))
    }
}

struct OptionalEndpoint(Option<Endpoint>);

impl fmt::Display for OptionalEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ep) => write!(f, "{ep}"),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for EndpointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InternalTcp: {}, InternalSecureTcp: {}, ExternalTcp: {}, ExternalSecureTcp: {}, \
             InternalHttp: {}, ExternalHttp: {}",
            self.internal_tcp,
            OptionalEndpoint(self.internal_secure_tcp),
            self.external_tcp,
            OptionalEndpoint(self.external_secure_tcp),
            self.internal_http,
            self.external_http,
        )
    }
}

/// Render an optional endpoint the way diagnostics expect (`n/a` when absent).
pub(crate) fn display_optional(endpoint: Option<Endpoint>) -> impl fmt::Display {
    OptionalEndpoint(endpoint)
}

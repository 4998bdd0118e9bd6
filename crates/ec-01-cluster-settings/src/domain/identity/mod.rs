//! # Node Identity
//!
//! A node's permanent instance id plus the endpoints it answers to.
//!
//! Peers may refer to a node by any of its addresses, so gossip decides "is
//! this about me" by endpoint membership rather than by comparing ids.

use std::fmt;

use crate::domain::types::{display_optional, Endpoint, EndpointSet, InstanceId};

/// Identity of the local node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    instance_id: InstanceId,
    debug_index: i32,
    endpoints: EndpointSet,
}

impl NodeIdentity {
    pub fn new(instance_id: InstanceId, debug_index: i32, endpoints: EndpointSet) -> Self {
        Self {
            instance_id,
            debug_index,
            endpoints,
        }
    }

    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    /// Ordinal used in diagnostics only.
    pub fn debug_index(&self) -> i32 {
        self.debug_index
    }

    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    /// Whether `endpoint` is one of this node's endpoints.
    ///
    /// `None` never matches, and neither does an unbound secure slot.
    pub fn belongs_to_self(&self, endpoint: Option<&Endpoint>) -> bool {
        let Some(endpoint) = endpoint else {
            return false;
        };
        let ep = &self.endpoints;

        ep.internal_http == *endpoint
            || ep.external_http == *endpoint
            || ep.internal_tcp == *endpoint
            || ep.internal_secure_tcp.as_ref() == Some(endpoint)
            || ep.external_tcp == *endpoint
            || ep.external_secure_tcp.as_ref() == Some(endpoint)
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ep = &self.endpoints;
        write!(
            f,
            "InstanceId: {}, InternalTcp: {}, InternalSecureTcp: {}, ExternalTcp: {}, \
             ExternalSecureTcp: {}, InternalHttp: {}, ExternalHttp: {}",
            self.instance_id,
            ep.internal_tcp,
            display_optional(ep.internal_secure_tcp),
            ep.external_tcp,
            display_optional(ep.external_secure_tcp),
            ep.internal_http,
            ep.external_http,
        )
    }
}

//! # Gossip Advertisement
//!
//! Maps the endpoints a node binds to the endpoints it publishes to peers.
//!
//! Nodes behind NAT or container port mapping listen on addresses peers
//! cannot dial. Each interface can override the advertised IP, and each HTTP
//! endpoint can override the advertised port. The four overrides are
//! independent. TCP ports are never overridden.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::domain::types::{display_optional, Endpoint, EndpointSet};

/// What a node publishes in every gossip round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GossipAdvertisement {
    bound: EndpointSet,
    internal_ip: Option<IpAddr>,
    external_ip: Option<IpAddr>,
    internal_http_port: Option<u16>,
    external_http_port: Option<u16>,
}

impl GossipAdvertisement {
    /// Advertise the bound endpoints unchanged.
    pub fn new(bound: EndpointSet) -> Self {
        Self {
            bound,
            internal_ip: None,
            external_ip: None,
            internal_http_port: None,
            external_http_port: None,
        }
    }

    #[must_use]
    pub fn with_internal_ip(mut self, ip: Option<IpAddr>) -> Self {
        self.internal_ip = ip;
        self
    }

    #[must_use]
    pub fn with_external_ip(mut self, ip: Option<IpAddr>) -> Self {
        self.external_ip = ip;
        self
    }

    #[must_use]
    pub fn with_internal_http_port(mut self, port: Option<u16>) -> Self {
        self.internal_http_port = port;
        self
    }

    #[must_use]
    pub fn with_external_http_port(mut self, port: Option<u16>) -> Self {
        self.external_http_port = port;
        self
    }

    pub fn bound(&self) -> &EndpointSet {
        &self.bound
    }

    pub fn advertise_internal_ip(&self) -> Option<IpAddr> {
        self.internal_ip
    }

    pub fn advertise_external_ip(&self) -> Option<IpAddr> {
        self.external_ip
    }

    pub fn advertise_internal_http_port(&self) -> Option<u16> {
        self.internal_http_port
    }

    pub fn advertise_external_http_port(&self) -> Option<u16> {
        self.external_http_port
    }

    /// Endpoints peers should use to reach this node.
    pub fn advertised(&self) -> EndpointSet {
        let b = &self.bound;
        let int_ip = self.internal_ip;
        let ext_ip = self.external_ip;

        EndpointSet {
            internal_tcp: translate(b.internal_tcp, int_ip, None),
            internal_secure_tcp: b.internal_secure_tcp.map(|ep| translate(ep, int_ip, None)),
            external_tcp: translate(b.external_tcp, ext_ip, None),
            external_secure_tcp: b.external_secure_tcp.map(|ep| translate(ep, ext_ip, None)),
            internal_http: translate(b.internal_http, int_ip, self.internal_http_port),
            external_http: translate(b.external_http, ext_ip, self.external_http_port),
        }
    }
}

fn translate(bound: Endpoint, ip: Option<IpAddr>, port: Option<u16>) -> Endpoint {
    SocketAddr::new(ip.unwrap_or(bound.ip()), port.unwrap_or(bound.port()))
}

struct Override<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for Override<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("-"),
        }
    }
}

impl fmt::Display for GossipAdvertisement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.bound;
        write!(
            f,
            "IntTcp: {}, IntSecureTcp: {}, ExtTcp: {}, ExtSecureTcp: {}, IntHttp: {}, ExtHttp: {}, \
             IntAdvertiseAs: {}:{}, ExtAdvertiseAs: {}:{}",
            b.internal_tcp,
            display_optional(b.internal_secure_tcp),
            b.external_tcp,
            display_optional(b.external_secure_tcp),
            b.internal_http,
            b.external_http,
            Override(self.internal_ip),
            Override(self.internal_http_port),
            Override(self.external_ip),
            Override(self.external_http_port),
        )
    }
}

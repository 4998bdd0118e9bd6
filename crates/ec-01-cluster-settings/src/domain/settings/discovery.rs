//! Peer discovery settings.
//!
//! Exactly one mechanism is active: DNS lookups of `cluster_dns`, or the
//! static `gossip_seeds` list. `discover_via_dns` decides which; supplying
//! seeds does not switch DNS discovery off.

use std::fmt;

use crate::domain::types::Endpoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverySettings {
    pub discover_via_dns: bool,
    pub cluster_dns: String,
    pub gossip_seeds: Vec<Endpoint>,
    /// Gossip even when the cluster has a single node.
    pub gossip_on_single_node: bool,
}

/// The active discovery mechanism and its data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryMode<'a> {
    Dns { cluster_dns: &'a str },
    Seeds { seeds: &'a [Endpoint] },
}

impl DiscoverySettings {
    pub fn mode(&self) -> DiscoveryMode<'_> {
        if self.discover_via_dns {
            DiscoveryMode::Dns {
                cluster_dns: &self.cluster_dns,
            }
        } else {
            DiscoveryMode::Seeds {
                seeds: &self.gossip_seeds,
            }
        }
    }
}

impl fmt::Display for DiscoveryMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dns { cluster_dns } => write!(f, "dns {cluster_dns}"),
            Self::Seeds { seeds } => {
                f.write_str("seeds ")?;
                for (i, seed) in seeds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{seed}")?;
                }
                Ok(())
            }
        }
    }
}

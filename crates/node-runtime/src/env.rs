//! Environment overrides.
//!
//! Applied after the settings file. A variable that is set but cannot be
//! parsed is reported with `warn!` and leaves the file value in place.

use std::net::IpAddr;
use std::str::FromStr;

use ec_01_cluster_settings::{ClusterSettingsInput, Endpoint};
use tracing::{info, warn};

pub const CLUSTER_DNS: &str = "EC_CLUSTER_DNS";
pub const DISCOVER_VIA_DNS: &str = "EC_DISCOVER_VIA_DNS";
pub const CLUSTER_SIZE: &str = "EC_CLUSTER_SIZE";
pub const GOSSIP_SEEDS: &str = "EC_GOSSIP_SEEDS";
pub const ADVERTISE_INTERNAL_IP: &str = "EC_ADVERTISE_INTERNAL_IP";
pub const ADVERTISE_EXTERNAL_IP: &str = "EC_ADVERTISE_EXTERNAL_IP";
pub const ADVERTISE_INTERNAL_HTTP_PORT: &str = "EC_ADVERTISE_INTERNAL_HTTP_PORT";
pub const ADVERTISE_EXTERNAL_HTTP_PORT: &str = "EC_ADVERTISE_EXTERNAL_HTTP_PORT";

/// Apply overrides resolved through `lookup`.
///
/// Returns how many variables were applied.
pub fn apply_env_overrides(
    input: &mut ClusterSettingsInput,
    lookup: impl Fn(&str) -> Option<String>,
) -> usize {
    let mut applied = 0;

    if let Some(dns) = lookup(CLUSTER_DNS) {
        input.cluster_dns = dns.trim().to_string();
        applied += 1;
    }
    if let Some(flag) = parsed::<bool>(&lookup, DISCOVER_VIA_DNS) {
        input.discover_via_dns = flag;
        applied += 1;
    }
    if let Some(size) = parsed::<usize>(&lookup, CLUSTER_SIZE) {
        input.cluster_node_count = size;
        applied += 1;
    }
    if let Some(seeds) = lookup(GOSSIP_SEEDS) {
        match parse_seeds(&seeds) {
            Ok(list) => {
                input.gossip_seeds = list;
                applied += 1;
            }
            Err(bad) => warn!(var = GOSSIP_SEEDS, value = %bad, "Ignoring malformed gossip seed list"),
        }
    }
    if let Some(ip) = parsed::<IpAddr>(&lookup, ADVERTISE_INTERNAL_IP) {
        input.advertise_internal_ip = Some(ip);
        applied += 1;
    }
    if let Some(ip) = parsed::<IpAddr>(&lookup, ADVERTISE_EXTERNAL_IP) {
        input.advertise_external_ip = Some(ip);
        applied += 1;
    }
    if let Some(port) = parsed::<u16>(&lookup, ADVERTISE_INTERNAL_HTTP_PORT) {
        input.advertise_internal_http_port = (port != 0).then_some(port);
        applied += 1;
    }
    if let Some(port) = parsed::<u16>(&lookup, ADVERTISE_EXTERNAL_HTTP_PORT) {
        input.advertise_external_http_port = (port != 0).then_some(port);
        applied += 1;
    }

    if applied > 0 {
        info!(count = applied, "Applied environment overrides");
    }
    applied
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<T> {
    let raw = lookup(var)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var, value = %raw, "Ignoring malformed environment override");
            None
        }
    }
}

/// Comma-separated endpoints. Returns the first bad entry on failure.
fn parse_seeds(raw: &str) -> Result<Vec<Endpoint>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|_| s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::Ipv4Addr;

    use ec_01_cluster_settings::test_utils::valid_input;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_no_variables_changes_nothing() {
        let mut input = valid_input();
        let before = format!("{input:?}");

        assert_eq!(apply_env_overrides(&mut input, lookup(&[])), 0);
        assert_eq!(format!("{input:?}"), before);
    }

    #[test]
    fn test_discovery_overrides() {
        let mut input = valid_input();
        let applied = apply_env_overrides(
            &mut input,
            lookup(&[
                (DISCOVER_VIA_DNS, "false"),
                (GOSSIP_SEEDS, "10.0.0.2:2112, 10.0.0.3:2112,"),
                (CLUSTER_SIZE, "5"),
            ]),
        );

        assert_eq!(applied, 3);
        assert!(!input.discover_via_dns);
        assert_eq!(input.gossip_seeds.len(), 2);
        assert_eq!(input.cluster_node_count, 5);
    }

    #[test]
    fn test_advertise_overrides() {
        let mut input = valid_input();
        apply_env_overrides(
            &mut input,
            lookup(&[
                (ADVERTISE_EXTERNAL_IP, "203.0.113.7"),
                (ADVERTISE_EXTERNAL_HTTP_PORT, "443"),
                (ADVERTISE_INTERNAL_HTTP_PORT, "0"),
            ]),
        );

        assert_eq!(
            input.advertise_external_ip,
            Some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)))
        );
        assert_eq!(input.advertise_external_http_port, Some(443));
        assert_eq!(input.advertise_internal_http_port, None);
    }

    #[test]
    fn test_malformed_values_are_ignored() {
        let mut input = valid_input();
        let applied = apply_env_overrides(
            &mut input,
            lookup(&[
                (CLUSTER_SIZE, "three"),
                (DISCOVER_VIA_DNS, "maybe"),
                (GOSSIP_SEEDS, "10.0.0.2:2112,nowhere"),
                (ADVERTISE_INTERNAL_IP, "10.0.0.256"),
                (CLUSTER_DNS, "other.internal"),
            ]),
        );

        assert_eq!(applied, 1);
        assert_eq!(input.cluster_node_count, 3);
        assert!(input.discover_via_dns);
        assert!(input.gossip_seeds.is_empty());
        assert_eq!(input.advertise_internal_ip, None);
        assert_eq!(input.cluster_dns, "other.internal");
    }
}

//! # Driven Ports (Outbound SPI)
//!
//! Interfaces the host application implements.

use std::fmt;

use crate::domain::ClusterSettingsInput;

/// Source of raw, unvalidated settings.
///
/// The bootstrap sequence resolves flags, environment and files into a
/// [`ClusterSettingsInput`]; validation happens afterwards in
/// [`ClusterSettings::build`](crate::domain::ClusterSettings::build).
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct EnvConfigProvider;
///
/// impl ConfigProvider for EnvConfigProvider {
///     fn cluster_settings_input(&self) -> ClusterSettingsInput {
///         let mut input = ClusterSettingsInput::default();
///         input.cluster_dns = std::env::var("EC_CLUSTER_DNS").unwrap_or_default();
///         input
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync {
    /// Resolve the raw settings input.
    fn cluster_settings_input(&self) -> ClusterSettingsInput;
}

/// Factory for the authentication provider the node runs with.
///
/// Concrete providers live outside this crate. Settings only carry the
/// factory and report its kind in diagnostics, never its contents.
pub trait AuthenticationProviderFactory: fmt::Debug + Send + Sync {
    /// Short category name, e.g. `"internal"` or `"ldaps"`.
    fn kind(&self) -> &'static str;
}

//! # Cluster Settings Service
//!
//! Shared handle over the validated settings, implementing the
//! `ClusterSettingsApi` port for the gossip, replication and HTTP layers.
//!
//! Settings are built once during bootstrap; the handle is cheap to clone
//! and hands out the same immutable value and the same exposure flags.

mod api;
mod core;

pub use core::ClusterSettingsService;

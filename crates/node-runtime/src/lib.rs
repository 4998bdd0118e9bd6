//! # Node Runtime Library
//!
//! Bootstrap sequence of an EventCluster node, exposed for testing. The
//! `main.rs` binary drives it.
//!
//! ## Startup Sequence
//!
//! 1. Initialise logging
//! 2. Load the settings file (or start from defaults)
//! 3. Apply `EC_*` environment overrides
//! 4. Validate; any violated invariant aborts startup
//! 5. Log the settings dump and quorum assessment
//! 6. Park until Ctrl+C

pub mod bootstrap;
pub mod env;
pub mod telemetry;

pub use bootstrap::{load_input, NodeRuntime};
pub use env::apply_env_overrides;
pub use telemetry::{init_tracing, TelemetryError};

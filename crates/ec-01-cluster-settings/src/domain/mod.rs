//! Domain Layer - Pure settings logic with no I/O
//!
//! This module contains the identity and replication contract of a node:
//! - Endpoint roles and the six-slot endpoint set
//! - Node identity and self-recognition for gossip
//! - Gossip advertisement (bound vs published addresses)
//! - Validated cluster settings, quorum assessment and exposure flags

pub mod advertise;
pub mod identity;
pub mod settings;
/// Core domain types (entities, values, errors)
pub mod types;

pub use advertise::*;
pub use identity::*;
pub use settings::*;
pub use types::*;

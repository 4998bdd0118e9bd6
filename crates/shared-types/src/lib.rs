//! # Shared Types Crate
//!
//! Value types that cross subsystem boundaries in the event-log store.
//!
//! ## Design Principles
//!
//! - **Immutable after construction**: every type here is built once and only
//!   read afterwards, so it can be shared by reference without locking.
//! - **Shape only**: `StreamAcl` records roles; deciding access is the job of
//!   the authorization layer.

pub mod acl;
pub mod entities;
pub mod errors;

pub use acl::{AclOperation, StreamAcl};
pub use entities::{CommitEventRecord, EventRecord};
pub use errors::StorageError;

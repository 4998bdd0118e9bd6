//! # Error Types
//!
//! Storage integrity errors raised while opening the transaction log.

use thiserror::Error;

/// Errors detected when the on-disk log does not match what the node expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A chunk or index file was written by an incompatible version.
    #[error("File {filename} has wrong version: {file_version}, while expected version is: {expected_version}.")]
    WrongFileVersion {
        filename: String,
        file_version: u8,
        expected_version: u8,
    },

    /// A reader checkpoint points past the writer checkpoint.
    #[error("Checkpoint '{checkpoint_name}' has greater value than writer checkpoint.")]
    ReaderCheckpointHigherThanWriter { checkpoint_name: String },
}

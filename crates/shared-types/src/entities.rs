//! # Event Log Entities
//!
//! Records produced by the read path when resolving committed events.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single event as stored in the transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position of the event within its stream.
    pub event_number: i64,
    /// Position of the prepare record in the transaction log.
    pub log_position: i64,
    /// Correlation id of the write request that produced the event.
    pub correlation_id: Uuid,
    /// Client-supplied event id.
    pub event_id: Uuid,
    /// Log position of the first prepare of the containing transaction.
    pub transaction_position: i64,
    /// Offset of this event within its transaction.
    pub transaction_offset: i32,
    /// Stream the event belongs to.
    pub event_stream_id: String,
    /// Expected stream version supplied with the write.
    pub expected_version: i64,
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: u64,
    /// Event type name.
    pub event_type: String,
    /// Event payload.
    pub data: Vec<u8>,
    /// Event metadata.
    pub metadata: Vec<u8>,
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EventNumber: {}, LogPosition: {}, EventId: {}, TransactionPosition: {}, \
             TransactionOffset: {}, EventStreamId: {}, ExpectedVersion: {}, \
             TimeStamp: {}, EventType: {}",
            self.event_number,
            self.log_position,
            self.event_id,
            self.transaction_position,
            self.transaction_offset,
            self.event_stream_id,
            self.expected_version,
            self.timestamp_ms,
            self.event_type,
        )
    }
}

/// An event paired with the log position at which its transaction committed.
///
/// Created by the read path; consumed by projections and read collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEventRecord {
    event: EventRecord,
    commit_position: i64,
}

impl CommitEventRecord {
    pub fn new(event: EventRecord, commit_position: i64) -> Self {
        Self {
            event,
            commit_position,
        }
    }

    pub fn event(&self) -> &EventRecord {
        &self.event
    }

    /// Log position of the commit record of the containing transaction.
    pub fn commit_position(&self) -> i64 {
        self.commit_position
    }

    pub fn into_event(self) -> EventRecord {
        self.event
    }
}

impl fmt::Display for CommitEventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CommitPosition: {}, Event: {}",
            self.commit_position, self.event
        )
    }
}

//! Events describing the lifecycle of a batch run
//!
//! Emitted over an in-memory channel for live observers (the CLI progress
//! display). Nothing here is persisted; a batch does not survive the
//! process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Notification sent after each state change in a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BatchEvent {
    /// The run started
    BatchStarted {
        batch_id: String,
        total: usize,
        timestamp: DateTime<Utc>,
    },
    /// An item's download began
    ItemStarted {
        index: usize,
        title: String,
        timestamp: DateTime<Utc>,
    },
    /// An item finished, successfully or not
    ItemFinished {
        index: usize,
        title: String,
        path: Option<PathBuf>,
        error: Option<String>,
        timestamp: DateTime<Utc>,
    },
    /// The run ended (all items processed, or cancelled early)
    BatchFinished {
        batch_id: String,
        processed: usize,
        succeeded: usize,
        failed: usize,
        cancelled: bool,
        timestamp: DateTime<Utc>,
    },
}

// Outbound port for time entry persistence.
//
// `save` is the only write that creates or changes an entry. It is a
// conditional write: the stored version must equal `expected_version`
// (0 for a new entry), and an entry carrying a progress time is refused while
// any other entry of the same user is in progress. Both checks and the write
// happen as one atomic step, which is what guarantees at most one in-progress
// entry per user under concurrent requests.

use crate::modules::time_entries::core::filter::TimeEntryFilter;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeEntryStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("time entry {} is already in progress", .0.id)]
    ProgressConflict(Box<TimeEntry>),

    #[error("time entry not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryPage {
    pub entries: Vec<TimeEntry>,
    pub total: u64,
}

#[async_trait]
pub trait TimeEntryStore: Send + Sync {
    async fn find_by_id(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<TimeEntry>, TimeEntryStoreError>;

    async fn find_in_progress(&self, user_id: &str) -> Result<Vec<TimeEntry>, TimeEntryStoreError>;

    /// Persists `entry` and returns it with its new version.
    async fn save(
        &self,
        entry: TimeEntry,
        expected_version: i64,
    ) -> Result<TimeEntry, TimeEntryStoreError>;

    async fn delete(&self, id: &str, user_id: &str) -> Result<(), TimeEntryStoreError>;

    /// Matching entries sorted by `start_time` descending, then id.
    async fn list(
        &self,
        user_id: &str,
        filter: &TimeEntryFilter,
        skip: u64,
        limit: u64,
    ) -> Result<TimeEntryPage, TimeEntryStoreError>;

    /// Entries of `user_id` recorded against any of `task_ids`, optionally
    /// restricted to a half-open `[from, until)` `start_time` window.
    async fn find_by_tasks(
        &self,
        user_id: &str,
        task_ids: &[String],
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<TimeEntry>, TimeEntryStoreError>;
}

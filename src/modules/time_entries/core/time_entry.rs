use crate::modules::time_entries::core::state::TimeEntryState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// A record of billable work against a task.
///
/// `start_progress_time` is set while the entry is being tracked live; the
/// accumulated `total_duration_in_hour` only grows when tracking stops.
/// `version` counts persisted writes and backs optimistic concurrency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub total_duration_in_hour: f64,
    pub start_progress_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

impl TimeEntry {
    pub fn state(&self) -> TimeEntryState {
        match self.start_progress_time {
            Some(since) => TimeEntryState::InProgress { since },
            None => TimeEntryState::NotStarted,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.start_progress_time.is_some()
    }
}

/// Wall-clock hours between two instants, at millisecond precision. Negative
/// when `to` precedes `from`.
pub fn elapsed_hours(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_HOUR
}

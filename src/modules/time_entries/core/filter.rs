use crate::modules::time_entries::core::time_entry::TimeEntry;
use chrono::{DateTime, Utc};

/// Optional narrowing of a user's time entries. Date bounds apply to
/// `start_time` and are both inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryFilter {
    pub task_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub in_progress_only: bool,
}

impl TimeEntryFilter {
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        self.task_id.as_ref().is_none_or(|t| *t == entry.task_id)
            && self.start_date.is_none_or(|from| entry.start_time >= from)
            && self.end_date.is_none_or(|to| entry.start_time <= to)
            && (!self.in_progress_only || entry.is_in_progress())
    }
}

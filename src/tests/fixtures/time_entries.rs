// Shared test fixture for time entries.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::tests::fixtures::catalog::USER_ID;
use chrono::{DateTime, TimeZone, Utc};

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    /// Monday 4 March 2024, 09:00 UTC.
    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
    }

    pub fn new() -> Self {
        Self {
            inner: TimeEntry {
                id: "te-fixed-0001".to_string(),
                task_id: "tas-1".to_string(),
                user_id: USER_ID.to_string(),
                start_time: Self::fixed_now(),
                total_duration_in_hour: 1.0,
                start_progress_time: None,
                created_at: Self::fixed_now(),
                updated_at: Self::fixed_now(),
                version: 0,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn start_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.total_duration_in_hour = v;
        self
    }

    pub fn start_progress_time(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.start_progress_time = v;
        self
    }

    pub fn version(mut self, v: i64) -> Self {
        self.inner.version = v;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let entry = TimeEntryBuilder::new()
            .id("te-2")
            .task_id("tas-9")
            .user_id("user-2")
            .hours(2.5)
            .version(3)
            .build();
        assert_eq!(entry.id, "te-2");
        assert_eq!(entry.task_id, "tas-9");
        assert_eq!(entry.user_id, "user-2");
        assert_eq!(entry.total_duration_in_hour, 2.5);
        assert_eq!(entry.version, 3);
        assert_eq!(entry.start_time, TimeEntryBuilder::fixed_now());
    }
}

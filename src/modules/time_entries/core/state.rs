use chrono::{DateTime, Utc};

/// Progress tracking state of a single time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEntryState {
    NotStarted,
    InProgress { since: DateTime<Utc> },
}

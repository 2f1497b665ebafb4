// Pure lifecycle decisions. Each function inspects the current entry and
// either yields the next version of it or the reason it was refused. Nothing
// here touches storage; handlers persist accepted entries.

use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::{TimeEntry, elapsed_hours};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entry is already in progress")]
    AlreadyInProgress,

    #[error("time entry is not in progress")]
    NotInProgress,

    #[error("startProgressTime can only be changed by starting or stopping the entry")]
    ProgressManagedByLifecycle,

    #[error("totalDurationInHour must be a non-negative number")]
    InvalidDuration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Accepted { entry: TimeEntry },
    Rejected { reason: DecideError },
}

/// Fields a caller may change on an existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeEntryChanges {
    pub start_time: Option<DateTime<Utc>>,
    pub total_duration_in_hour: Option<f64>,
    pub task_id: Option<String>,
    pub start_progress_time_supplied: bool,
}

fn is_valid_duration(hours: f64) -> bool {
    hours.is_finite() && hours >= 0.0
}

pub fn decide_create(
    time_entry_id: String,
    task_id: String,
    user_id: String,
    start_time: DateTime<Utc>,
    total_duration_in_hour: f64,
    created_at: DateTime<Utc>,
) -> Decision {
    if !is_valid_duration(total_duration_in_hour) {
        return Decision::Rejected {
            reason: DecideError::InvalidDuration,
        };
    }
    Decision::Accepted {
        entry: TimeEntry {
            id: time_entry_id,
            task_id,
            user_id,
            start_time,
            total_duration_in_hour,
            start_progress_time: None,
            created_at,
            updated_at: created_at,
            version: 0,
        },
    }
}

pub fn decide_start(entry: &TimeEntry, started_at: DateTime<Utc>) -> Decision {
    match entry.state() {
        TimeEntryState::InProgress { .. } => Decision::Rejected {
            reason: DecideError::AlreadyInProgress,
        },
        TimeEntryState::NotStarted => Decision::Accepted {
            entry: TimeEntry {
                start_progress_time: Some(started_at),
                updated_at: started_at,
                ..entry.clone()
            },
        },
    }
}

pub fn decide_stop(entry: &TimeEntry, stopped_at: DateTime<Utc>) -> Decision {
    match entry.state() {
        TimeEntryState::NotStarted => Decision::Rejected {
            reason: DecideError::NotInProgress,
        },
        TimeEntryState::InProgress { since } => Decision::Accepted {
            entry: TimeEntry {
                total_duration_in_hour: entry.total_duration_in_hour
                    + elapsed_hours(since, stopped_at),
                start_progress_time: None,
                updated_at: stopped_at,
                ..entry.clone()
            },
        },
    }
}

pub fn decide_update(
    entry: &TimeEntry,
    changes: TimeEntryChanges,
    updated_at: DateTime<Utc>,
) -> Decision {
    if changes.start_progress_time_supplied {
        return Decision::Rejected {
            reason: DecideError::ProgressManagedByLifecycle,
        };
    }
    if let Some(hours) = changes.total_duration_in_hour {
        if !is_valid_duration(hours) {
            return Decision::Rejected {
                reason: DecideError::InvalidDuration,
            };
        }
    }
    Decision::Accepted {
        entry: TimeEntry {
            start_time: changes.start_time.unwrap_or(entry.start_time),
            total_duration_in_hour: changes
                .total_duration_in_hour
                .unwrap_or(entry.total_duration_in_hour),
            task_id: changes.task_id.unwrap_or_else(|| entry.task_id.clone()),
            updated_at,
            ..entry.clone()
        },
    }
}

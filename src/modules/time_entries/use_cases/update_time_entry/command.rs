use crate::modules::time_entries::core::decide::TimeEntryChanges;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub changes: TimeEntryChanges,
    pub updated_at: DateTime<Utc>,
}

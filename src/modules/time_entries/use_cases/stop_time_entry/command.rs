use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub stopped_at: DateTime<Utc>,
}

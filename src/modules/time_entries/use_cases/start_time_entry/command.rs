use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub started_at: DateTime<Utc>,
}

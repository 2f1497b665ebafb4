use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTimeEntry {
    pub time_entry_id: String,
    pub task_id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub total_duration_in_hour: f64,
    pub created_at: DateTime<Utc>,
}

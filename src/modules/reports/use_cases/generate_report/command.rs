use crate::modules::reports::core::report::ReportType;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub report_id: String,
    pub customer_id: String,
    pub year: i32,
    pub month: u32,
    pub report_type: ReportType,
    pub user_id: String,
    pub generated_at: DateTime<Utc>,
}

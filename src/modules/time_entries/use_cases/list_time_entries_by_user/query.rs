use crate::modules::time_entries::core::filter::TimeEntryFilter;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::pagination::{PageInfo, PageRequest};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct ListTimeEntriesByUser {
    pub user_id: String,
    pub filter: TimeEntryFilter,
    pub page: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryList {
    pub entries: Vec<TimeEntry>,
    pub pagination: PageInfo,
}

use crate::modules::catalog::adapters::outbound::stores::{
    Catalog, CustomerStore, ProjectStore, TaskStore,
};
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::shared::core::errors::{ServiceError, require_id};
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct AvailableMonth {
    pub year: i32,
    pub month: u32,
}

/// Months, newest first, in which the user logged time on the customer's tasks.
pub struct ListAvailableMonthsHandler<TCatalog, TEntries>
where
    TCatalog: Catalog + 'static,
    TEntries: TimeEntryStore + 'static,
{
    catalog: Arc<TCatalog>,
    entries: Arc<TEntries>,
}

impl<TCatalog, TEntries> ListAvailableMonthsHandler<TCatalog, TEntries>
where
    TCatalog: Catalog + 'static,
    TEntries: TimeEntryStore + 'static,
{
    pub fn new(catalog: Arc<TCatalog>, entries: Arc<TEntries>) -> Self {
        Self { catalog, entries }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        customer_id: &str,
        user_id: &str,
    ) -> Result<Vec<AvailableMonth>, ServiceError> {
        require_id("customerId", customer_id)?;
        if self
            .catalog
            .find_customer_by_id(customer_id, user_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::NotFound(format!("customer {customer_id}")));
        }

        let project_ids: Vec<String> = self
            .catalog
            .find_projects_by_customer(customer_id, user_id)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        if project_ids.is_empty() {
            return Ok(vec![]);
        }
        let task_ids: Vec<String> = self
            .catalog
            .find_tasks_by_projects(&project_ids, user_id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();
        if task_ids.is_empty() {
            return Ok(vec![]);
        }

        let months: BTreeSet<AvailableMonth> = self
            .entries
            .find_by_tasks(user_id, &task_ids, None)
            .await?
            .iter()
            .map(|e| AvailableMonth {
                year: e.start_time.year(),
                month: e.start_time.month(),
            })
            .collect();
        Ok(months.into_iter().rev().collect())
    }
}

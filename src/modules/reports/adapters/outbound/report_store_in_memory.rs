use crate::modules::reports::adapters::outbound::report_store::{ReportStore, ReportStoreError};
use crate::modules::reports::core::report::Report;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryReportStore {
    reports: RwLock<HashMap<String, Report>>,
    is_offline: bool,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), ReportStoreError> {
        if self.is_offline {
            return Err(ReportStoreError::Backend("Report store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReportStore for InMemoryReportStore {
    async fn insert(&self, report: Report) -> Result<(), ReportStoreError> {
        self.ensure_online()?;
        let mut guard = self.reports.write().await;
        if guard.contains_key(&report.id) {
            return Err(ReportStoreError::Duplicate(report.id));
        }
        guard.insert(report.id.clone(), report);
        Ok(())
    }

    async fn find_by_id(&self, id: &str, user_id: &str) -> Result<Option<Report>, ReportStoreError> {
        self.ensure_online()?;
        Ok(self
            .reports
            .read()
            .await
            .get(id)
            .filter(|r| r.user_id == user_id)
            .cloned())
    }

    async fn list(
        &self,
        user_id: &str,
        customer_id: Option<&str>,
    ) -> Result<Vec<Report>, ReportStoreError> {
        self.ensure_online()?;
        let mut reports: Vec<Report> = self
            .reports
            .read()
            .await
            .values()
            .filter(|r| r.user_id == user_id)
            .filter(|r| customer_id.is_none_or(|c| r.customer_id == c))
            .cloned()
            .collect();
        reports.sort_by(|a, b| {
            b.generation_date
                .cmp(&a.generation_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(reports)
    }
}

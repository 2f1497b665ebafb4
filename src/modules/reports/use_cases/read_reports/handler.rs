use crate::modules::reports::adapters::outbound::report_store::ReportStore;
use crate::modules::reports::core::report::Report;
use crate::shared::core::errors::{ServiceError, require_id};
use std::sync::Arc;

/// Reads stored report snapshots back unchanged.
pub struct ReadReportsHandler<TReports>
where
    TReports: ReportStore + 'static,
{
    reports: Arc<TReports>,
}

impl<TReports> ReadReportsHandler<TReports>
where
    TReports: ReportStore + 'static,
{
    pub fn new(reports: Arc<TReports>) -> Self {
        Self { reports }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_report(&self, report_id: &str, user_id: &str) -> Result<Report, ServiceError> {
        require_id("reportId", report_id)?;
        self.reports
            .find_by_id(report_id, user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("report {report_id}")))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_reports(
        &self,
        customer_id: Option<&str>,
        user_id: &str,
    ) -> Result<Vec<Report>, ServiceError> {
        Ok(self.reports.list(user_id, customer_id).await?)
    }
}

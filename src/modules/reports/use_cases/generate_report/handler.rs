use crate::modules::catalog::adapters::outbound::stores::{
    Catalog, ContractStore, CustomerStore, ProjectStore, TaskStore, UserStore,
};
use crate::modules::reports::adapters::outbound::report_store::ReportStore;
use crate::modules::reports::core::aggregate::aggregate;
use crate::modules::reports::core::hierarchy::build_hierarchy;
use crate::modules::reports::core::period::MonthWindow;
use crate::modules::reports::core::report::{Report, ReportPeriod, ReportTotals};
use crate::modules::reports::core::summary::{ReportSummary, summarize};
use crate::modules::reports::use_cases::generate_report::command::GenerateReport;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::shared::core::errors::{ServiceError, require_id};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Generates a monthly report for one customer and stores it as an immutable
/// snapshot. Every read happens before the single insert, so a failure at any
/// step leaves nothing behind.
pub struct GenerateReportHandler<TCatalog, TEntries, TReports>
where
    TCatalog: Catalog + 'static,
    TEntries: TimeEntryStore + 'static,
    TReports: ReportStore + 'static,
{
    catalog: Arc<TCatalog>,
    entries: Arc<TEntries>,
    reports: Arc<TReports>,
}

impl<TCatalog, TEntries, TReports> GenerateReportHandler<TCatalog, TEntries, TReports>
where
    TCatalog: Catalog + 'static,
    TEntries: TimeEntryStore + 'static,
    TReports: ReportStore + 'static,
{
    pub fn new(catalog: Arc<TCatalog>, entries: Arc<TEntries>, reports: Arc<TReports>) -> Self {
        Self {
            catalog,
            entries,
            reports,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: GenerateReport) -> Result<ReportSummary, ServiceError> {
        require_id("reportId", &command.report_id)?;
        require_id("customerId", &command.customer_id)?;
        let window = MonthWindow::new(command.year, command.month)?;

        let customer = self
            .catalog
            .find_customer_by_id(&command.customer_id, &command.user_id)
            .await?
            .ok_or_else(|| {
                ServiceError::InvalidRequest(format!("unknown customer {}", command.customer_id))
            })?;

        let projects = self
            .catalog
            .find_projects_by_customer(&customer.id, &command.user_id)
            .await?;
        let project_ids: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();
        let tasks = if project_ids.is_empty() {
            vec![]
        } else {
            self.catalog
                .find_tasks_by_projects(&project_ids, &command.user_id)
                .await?
        };
        let contract_ids: Vec<String> = projects
            .iter()
            .filter_map(|p| p.contract_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let contracts = if contract_ids.is_empty() {
            vec![]
        } else {
            self.catalog.find_contracts_by_ids(&contract_ids).await?
        };

        let hierarchy =
            build_hierarchy(command.report_type, &customer, &projects, &tasks, &contracts);
        let task_ids = hierarchy.task_ids();
        let entries = if task_ids.is_empty() {
            vec![]
        } else {
            self.entries
                .find_by_tasks(&command.user_id, &task_ids, Some((window.start, window.next_start)))
                .await?
        };
        tracing::debug!(
            projects = projects.len(),
            tasks = tasks.len(),
            entries = entries.len(),
            "report inputs loaded"
        );

        let aggregation = aggregate(hierarchy, &entries, &window);
        let user = self.catalog.find_user_by_id(&command.user_id).await?;

        let report = Report {
            id: command.report_id,
            report_type: command.report_type,
            customer_id: customer.id.clone(),
            user_id: command.user_id,
            generation_date: command.generated_at,
            period: ReportPeriod {
                year: window.year,
                month: window.month,
                start_date: window.start,
                end_date: window.end,
            },
            summary: ReportTotals {
                total_days: window.working_days(),
                total_hours: aggregation.total_hours,
                total_cost: aggregation.total_cost,
            },
            contracts: aggregation.contracts,
        };
        self.reports.insert(report.clone()).await?;
        tracing::info!(report_id = %report.id, customer_id = %report.customer_id, "report generated");

        Ok(summarize(&report, &customer, user.as_ref(), &projects, &tasks))
    }
}

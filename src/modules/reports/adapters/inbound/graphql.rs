use async_graphql::{Context, Enum, ID, Json, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::reports::core::report::{Report, ReportType};
use crate::modules::reports::core::summary::ReportSummary;
use crate::modules::reports::use_cases::generate_report::command::GenerateReport;
use crate::shared::inbound::graphql_error::{gql_error, require_caller};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlReportType {
    Timesheet,
    Invoice,
}

impl From<GqlReportType> for ReportType {
    fn from(t: GqlReportType) -> Self {
        match t {
            GqlReportType::Timesheet => ReportType::Timesheet,
            GqlReportType::Invoice => ReportType::Invoice,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAvailableMonth {
    pub year: i32,
    pub month: u32,
}

#[derive(Default)]
pub struct ReportsQuery;

#[Object]
impl ReportsQuery {
    async fn available_months(
        &self,
        context: &Context<'_>,
        user_id: String,
        customer_id: ID,
    ) -> GqlResult<Vec<GqlAvailableMonth>> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let months = state
            .available_months_handler
            .handle(&customer_id, &user_id)
            .await
            .map_err(gql_error)?;
        Ok(months
            .into_iter()
            .map(|m| GqlAvailableMonth {
                year: m.year,
                month: m.month,
            })
            .collect())
    }

    /// Stored report document, unchanged.
    async fn report(&self, context: &Context<'_>, user_id: String, id: ID) -> GqlResult<Json<Report>> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let report = state
            .read_reports_handler
            .get_report(&id, &user_id)
            .await
            .map_err(gql_error)?;
        Ok(Json(report))
    }

    async fn reports(
        &self,
        context: &Context<'_>,
        user_id: String,
        customer_id: Option<ID>,
    ) -> GqlResult<Vec<Json<Report>>> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let reports = state
            .read_reports_handler
            .list_reports(customer_id.as_deref().map(String::as_str), &user_id)
            .await
            .map_err(gql_error)?;
        Ok(reports.into_iter().map(Json).collect())
    }
}

#[derive(Default)]
pub struct ReportsMutation;

#[Object]
impl ReportsMutation {
    async fn generate_report(
        &self,
        context: &Context<'_>,
        user_id: String,
        customer_id: ID,
        year: i32,
        month: u32,
        report_type: GqlReportType,
    ) -> GqlResult<Json<ReportSummary>> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let command = GenerateReport {
            report_id: Uuid::now_v7().to_string(),
            customer_id: customer_id.0,
            year,
            month,
            report_type: report_type.into(),
            user_id,
            generated_at: Utc::now(),
        };
        let summary = state
            .generate_report_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(Json(summary))
    }
}

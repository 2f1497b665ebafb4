use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::reports::core::report::ReportType;
use crate::modules::reports::use_cases::generate_report::command::GenerateReport;
use crate::shared::inbound::api_error::ApiError;
use crate::shared::inbound::caller::CallerId;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", post(generate).get(list))
        .route("/reports/{id}", get(find))
        .route("/customers/{id}/available-months", get(available_months))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportBody {
    pub customer_id: String,
    pub year: i32,
    pub month: u32,
    pub report_type: ReportType,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReportsParams {
    pub customer_id: Option<String>,
}

pub async fn generate(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    body: Result<Json<GenerateReportBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let command = GenerateReport {
        report_id: Uuid::now_v7().to_string(),
        customer_id: body.customer_id,
        year: body.year,
        month: body.month,
        report_type: body.report_type,
        user_id,
        generated_at: Utc::now(),
    };
    let summary = state.generate_report_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

pub async fn list(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    params: Result<Query<ListReportsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let reports = state
        .read_reports_handler
        .list_reports(params.customer_id.as_deref(), &user_id)
        .await?;
    Ok(Json(reports))
}

pub async fn find(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.read_reports_handler.get_report(&id, &user_id).await?))
}

pub async fn available_months(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let months = state
        .available_months_handler
        .handle(&customer_id, &user_id)
        .await?;
    Ok(Json(months))
}

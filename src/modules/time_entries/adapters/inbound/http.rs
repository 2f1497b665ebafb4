use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::modules::time_entries::core::decide::TimeEntryChanges;
use crate::modules::time_entries::core::filter::TimeEntryFilter;
use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::query::ListTimeEntriesByUser;
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;
use crate::modules::time_entries::use_cases::stop_time_entry::command::StopTimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest};
use crate::shared::inbound::api_error::ApiError;
use crate::shared::inbound::caller::CallerId;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/time-entries", post(create).get(list))
        .route("/time-entries/{id}", patch(update).delete(delete))
        .route("/time-entries/{id}/start", post(start))
        .route("/time-entries/{id}/stop", post(stop))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeEntryBody {
    pub task_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub total_duration_in_hour: f64,
}

/// Present fields are applied. A `startProgressTime` key is refused even
/// when its value is null.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeEntryBody {
    pub task_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub total_duration_in_hour: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub start_progress_time: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTimeEntriesParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub task_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub in_progress_only: Option<bool>,
}

pub async fn create(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    body: Result<Json<CreateTimeEntryBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let command = CreateTimeEntry {
        time_entry_id: Uuid::now_v7().to_string(),
        task_id: body.task_id,
        user_id,
        start_time: body.start_time,
        total_duration_in_hour: body.total_duration_in_hour,
        created_at: Utc::now(),
    };
    let created = state.create_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    params: Result<Query<ListTimeEntriesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let page = PageRequest::new(
        params.page.unwrap_or(DEFAULT_PAGE),
        params.limit.unwrap_or(DEFAULT_LIMIT),
    )?;
    let query = ListTimeEntriesByUser {
        user_id,
        filter: TimeEntryFilter {
            task_id: params.task_id,
            start_date: params.start_date,
            end_date: params.end_date,
            in_progress_only: params.in_progress_only.unwrap_or(false),
        },
        page,
    };
    Ok(Json(state.list_handler.handle(query).await?))
}

pub async fn update(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
    body: Result<Json<UpdateTimeEntryBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let command = UpdateTimeEntry {
        time_entry_id: id,
        user_id,
        changes: TimeEntryChanges {
            start_time: body.start_time,
            total_duration_in_hour: body.total_duration_in_hour,
            task_id: body.task_id,
            start_progress_time_supplied: body.start_progress_time.is_some(),
        },
        updated_at: Utc::now(),
    };
    Ok(Json(state.update_handler.handle(command).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.delete_handler.handle(&id, &user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn start(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let command = StartTimeEntry {
        time_entry_id: id,
        user_id,
        started_at: Utc::now(),
    };
    Ok(Json(state.start_handler.handle(command).await?))
}

pub async fn stop(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let command = StopTimeEntry {
        time_entry_id: id,
        user_id,
        stopped_at: Utc::now(),
    };
    Ok(Json(state.stop_handler.handle(command).await?))
}

#[cfg(test)]
mod time_entries_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::catalog::adapters::outbound::stores_in_memory::InMemoryCatalog;
    use crate::modules::reports::adapters::outbound::report_store_in_memory::InMemoryReportStore;
    use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
    use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
    use crate::shared::inbound::caller::USER_ID_HEADER;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::catalog::{CatalogBuilder, USER_ID};
    use crate::tests::fixtures::time_entries::TimeEntryBuilder;

    use super::routes;

    fn catalog() -> InMemoryCatalog {
        CatalogBuilder::new()
            .customer("cus-1", 400.0, None)
            .project("pro-1", "cus-1", None)
            .task("tas-1", "pro-1")
            .build()
    }

    async fn app_with(entries: InMemoryTimeEntryStore) -> Router {
        let state = AppState::new(
            Arc::new(catalog()),
            Arc::new(entries),
            Arc::new(InMemoryReportStore::new()),
        );
        routes().with_state(state)
    }

    async fn seeded() -> InMemoryTimeEntryStore {
        let store = InMemoryTimeEntryStore::new();
        for id in ["te-1", "te-2"] {
            store
                .save(TimeEntryBuilder::new().id(id).build(), 0)
                .await
                .unwrap();
        }
        store
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(USER_ID_HEADER, USER_ID)
            .header("content-type", "application/json");
        builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_created_entry() {
        let body = r#"{"taskId":"tas-1","startTime":"2024-03-04T09:00:00Z","totalDurationInHour":0}"#;
        let response = app_with(InMemoryTimeEntryStore::new())
            .await
            .oneshot(request("POST", "/time-entries", Some(body)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = json_body(response).await;
        assert_eq!(json["taskId"], "tas-1");
        assert_eq!(json["startProgressTime"], serde_json::Value::Null);
        assert!(json["id"].as_str().is_some());
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app_with(InMemoryTimeEntryStore::new())
            .await
            .oneshot(request("POST", "/time-entries", Some("not-json")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_401_without_a_caller() {
        let response = app_with(InMemoryTimeEntryStore::new())
            .await
            .oneshot(
                Request::get("/time-entries")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn it_should_return_409_with_the_running_entry_on_a_second_start() {
        let app = app_with(seeded().await).await;
        let first = app
            .clone()
            .oneshot(request("POST", "/time-entries/te-1/start", None))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(request("POST", "/time-entries/te-2/start", None))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let json = json_body(second).await;
        assert_eq!(json["code"], "CONFLICT");
        assert_eq!(json["existing"]["id"], "te-1");
    }

    #[tokio::test]
    async fn it_should_return_409_when_stopping_an_idle_entry() {
        let response = app_with(seeded().await)
            .await
            .oneshot(request("POST", "/time-entries/te-1/stop", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(response).await["code"], "INVALID_STATE");
    }

    #[tokio::test]
    async fn it_should_return_400_when_patching_the_progress_time_even_to_null() {
        let response = app_with(seeded().await)
            .await
            .oneshot(request(
                "PATCH",
                "/time-entries/te-1",
                Some(r#"{"startProgressTime":null}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_patch_only_the_supplied_fields() {
        let response = app_with(seeded().await)
            .await
            .oneshot(request(
                "PATCH",
                "/time-entries/te-1",
                Some(r#"{"totalDurationInHour":3.5}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["totalDurationInHour"], 3.5);
        assert_eq!(json["taskId"], "tas-1");
    }

    #[tokio::test]
    async fn it_should_return_204_then_404_on_delete() {
        let app = app_with(seeded().await).await;
        let first = app
            .clone()
            .oneshot(request("DELETE", "/time-entries/te-1", None))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = app
            .oneshot(request("DELETE", "/time-entries/te-1", None))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_list_with_pagination() {
        let response = app_with(seeded().await)
            .await
            .oneshot(request("GET", "/time-entries?page=2&limit=1", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["entries"].as_array().unwrap().len(), 1);
        assert_eq!(json["pagination"]["total"], 2);
        assert_eq!(json["pagination"]["pages"], 2);
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_zero_limit() {
        let response = app_with(seeded().await)
            .await
            .oneshot(request("GET", "/time-entries?limit=0", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_503_when_the_store_is_offline() {
        let mut entries = InMemoryTimeEntryStore::new();
        entries.toggle_offline();
        let response = app_with(entries)
            .await
            .oneshot(request("GET", "/time-entries", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

use async_graphql::{Context, ID, MaybeUndefined, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::time_entries::core::decide::TimeEntryChanges;
use crate::modules::time_entries::core::filter::TimeEntryFilter;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::query::{
    ListTimeEntriesByUser, TimeEntryList,
};
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;
use crate::modules::time_entries::use_cases::stop_time_entry::command::StopTimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, PageInfo, PageRequest};
use crate::shared::inbound::graphql_error::{gql_error, require_caller};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: ID,
    pub task_id: String,
    pub user_id: String,
    pub start_time: i64,
    pub total_duration_in_hour: f64,
    pub start_progress_time: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(e: TimeEntry) -> Self {
        Self {
            id: ID(e.id),
            task_id: e.task_id,
            user_id: e.user_id,
            start_time: e.start_time.timestamp_millis(),
            total_duration_in_hour: e.total_duration_in_hour,
            start_progress_time: e.start_progress_time.map(|t| t.timestamp_millis()),
            created_at: e.created_at.timestamp_millis(),
            updated_at: e.updated_at.timestamp_millis(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlPageInfo {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

impl From<PageInfo> for GqlPageInfo {
    fn from(p: PageInfo) -> Self {
        Self {
            total: p.total,
            page: p.page,
            limit: p.limit,
            pages: p.pages,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntryList {
    pub entries: Vec<GqlTimeEntry>,
    pub pagination: GqlPageInfo,
}

impl From<TimeEntryList> for GqlTimeEntryList {
    fn from(list: TimeEntryList) -> Self {
        Self {
            entries: list.entries.into_iter().map(Into::into).collect(),
            pagination: list.pagination.into(),
        }
    }
}

fn from_millis(field: &str, ms: i64) -> Result<DateTime<Utc>, ServiceError> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| ServiceError::InvalidRequest(format!("{field} is out of range")))
}

#[derive(Default)]
pub struct TimeEntriesQuery;

#[Object]
impl TimeEntriesQuery {
    #[allow(clippy::too_many_arguments)]
    async fn time_entries(
        &self,
        context: &Context<'_>,
        user_id: String,
        page: Option<u64>,
        limit: Option<u64>,
        task_id: Option<String>,
        start_date: Option<i64>,
        end_date: Option<i64>,
        in_progress_only: Option<bool>,
    ) -> GqlResult<GqlTimeEntryList> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let query = ListTimeEntriesByUser {
            user_id,
            filter: TimeEntryFilter {
                task_id,
                start_date: start_date
                    .map(|ms| from_millis("startDate", ms))
                    .transpose()
                    .map_err(gql_error)?,
                end_date: end_date
                    .map(|ms| from_millis("endDate", ms))
                    .transpose()
                    .map_err(gql_error)?,
                in_progress_only: in_progress_only.unwrap_or(false),
            },
            page: PageRequest::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
                .map_err(gql_error)?,
        };
        let list = state.list_handler.handle(query).await.map_err(gql_error)?;
        Ok(list.into())
    }
}

#[derive(Default)]
pub struct TimeEntriesMutation;

#[Object]
impl TimeEntriesMutation {
    async fn create_time_entry(
        &self,
        context: &Context<'_>,
        user_id: String,
        task_id: String,
        start_time: i64,
        total_duration_in_hour: Option<f64>,
    ) -> GqlResult<GqlTimeEntry> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let command = CreateTimeEntry {
            time_entry_id: Uuid::now_v7().to_string(),
            task_id,
            user_id,
            start_time: from_millis("startTime", start_time).map_err(gql_error)?,
            total_duration_in_hour: total_duration_in_hour.unwrap_or(0.0),
            created_at: Utc::now(),
        };
        let created = state.create_handler.handle(command).await.map_err(gql_error)?;
        Ok(created.into())
    }

    #[allow(clippy::too_many_arguments)]
    async fn update_time_entry(
        &self,
        context: &Context<'_>,
        user_id: String,
        id: ID,
        task_id: Option<String>,
        start_time: Option<i64>,
        total_duration_in_hour: Option<f64>,
        start_progress_time: MaybeUndefined<i64>,
    ) -> GqlResult<GqlTimeEntry> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let command = UpdateTimeEntry {
            time_entry_id: id.0,
            user_id,
            changes: TimeEntryChanges {
                start_time: start_time
                    .map(|ms| from_millis("startTime", ms))
                    .transpose()
                    .map_err(gql_error)?,
                total_duration_in_hour,
                task_id,
                start_progress_time_supplied: !start_progress_time.is_undefined(),
            },
            updated_at: Utc::now(),
        };
        let updated = state.update_handler.handle(command).await.map_err(gql_error)?;
        Ok(updated.into())
    }

    async fn delete_time_entry(
        &self,
        context: &Context<'_>,
        user_id: String,
        id: ID,
    ) -> GqlResult<bool> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(&id, &user_id)
            .await
            .map_err(gql_error)?;
        Ok(true)
    }

    async fn start_time_entry(
        &self,
        context: &Context<'_>,
        user_id: String,
        id: ID,
    ) -> GqlResult<GqlTimeEntry> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let command = StartTimeEntry {
            time_entry_id: id.0,
            user_id,
            started_at: Utc::now(),
        };
        let started = state.start_handler.handle(command).await.map_err(gql_error)?;
        Ok(started.into())
    }

    async fn stop_time_entry(
        &self,
        context: &Context<'_>,
        user_id: String,
        id: ID,
    ) -> GqlResult<GqlTimeEntry> {
        let user_id = require_caller(&user_id)?;
        let state = context.data_unchecked::<AppState>();
        let command = StopTimeEntry {
            time_entry_id: id.0,
            user_id,
            stopped_at: Utc::now(),
        };
        let stopped = state.stop_handler.handle(command).await.map_err(gql_error)?;
        Ok(stopped.into())
    }
}

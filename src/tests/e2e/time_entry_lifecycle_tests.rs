use crate::modules::catalog::adapters::outbound::stores_in_memory::InMemoryCatalog;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::modules::time_entries::use_cases::create_time_entry::handler::CreateTimeEntryHandler;
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;
use crate::modules::time_entries::use_cases::start_time_entry::handler::StartTimeEntryHandler;
use crate::modules::time_entries::use_cases::stop_time_entry::command::StopTimeEntry;
use crate::modules::time_entries::use_cases::stop_time_entry::handler::StopTimeEntryHandler;
use crate::shared::core::errors::ServiceError;
use crate::tests::fixtures::catalog::{CatalogBuilder, USER_ID};
use crate::tests::fixtures::time_entries::TimeEntryBuilder;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;

struct Lifecycle {
    store: Arc<InMemoryTimeEntryStore>,
    create: CreateTimeEntryHandler<InMemoryTimeEntryStore, InMemoryCatalog>,
    start: StartTimeEntryHandler<InMemoryTimeEntryStore>,
    stop: StopTimeEntryHandler<InMemoryTimeEntryStore>,
}

impl Lifecycle {
    fn new() -> Self {
        let catalog = Arc::new(
            CatalogBuilder::new()
                .customer("cus-1", 400.0, None)
                .project("pro-1", "cus-1", None)
                .task("tas-1", "pro-1")
                .build(),
        );
        let store = Arc::new(InMemoryTimeEntryStore::new());
        Self {
            create: CreateTimeEntryHandler::new(store.clone(), catalog),
            start: StartTimeEntryHandler::new(store.clone()),
            stop: StopTimeEntryHandler::new(store.clone()),
            store,
        }
    }

    async fn create(&self, id: &str) {
        self.create
            .handle(CreateTimeEntry {
                time_entry_id: id.into(),
                task_id: "tas-1".into(),
                user_id: USER_ID.into(),
                start_time: TimeEntryBuilder::fixed_now(),
                total_duration_in_hour: 0.0,
                created_at: TimeEntryBuilder::fixed_now(),
            })
            .await
            .unwrap();
    }

    async fn start(&self, id: &str, at: DateTime<Utc>) -> Result<(), ServiceError> {
        self.start
            .handle(StartTimeEntry {
                time_entry_id: id.into(),
                user_id: USER_ID.into(),
                started_at: at,
            })
            .await
            .map(|_| ())
    }

    async fn stop(&self, id: &str, at: DateTime<Utc>) -> Result<(), ServiceError> {
        self.stop
            .handle(StopTimeEntry {
                time_entry_id: id.into(),
                user_id: USER_ID.into(),
                stopped_at: at,
            })
            .await
            .map(|_| ())
    }

    async fn in_progress(&self) -> usize {
        self.store.find_in_progress(USER_ID).await.unwrap().len()
    }
}

#[tokio::test]
async fn accumulates_hours_over_several_sessions() {
    let lifecycle = Lifecycle::new();
    lifecycle.create("te-1").await;
    let t0 = TimeEntryBuilder::fixed_now();

    lifecycle.start("te-1", t0).await.unwrap();
    lifecycle.stop("te-1", t0 + TimeDelta::minutes(90)).await.unwrap();
    lifecycle.start("te-1", t0 + TimeDelta::hours(3)).await.unwrap();
    lifecycle
        .stop("te-1", t0 + TimeDelta::hours(3) + TimeDelta::minutes(30))
        .await
        .unwrap();

    let entry = lifecycle.store.find_by_id("te-1", USER_ID).await.unwrap().unwrap();
    assert!((entry.total_duration_in_hour - 2.0).abs() < 1e-9);
    assert_eq!(entry.start_progress_time, None);
}

#[tokio::test]
async fn never_has_more_than_one_entry_in_progress() {
    let lifecycle = Lifecycle::new();
    for id in ["te-1", "te-2", "te-3"] {
        lifecycle.create(id).await;
    }
    let t0 = TimeEntryBuilder::fixed_now();
    // (entry, start or stop, entry already running that must block the call)
    let steps: [(&str, bool, Option<&str>); 7] = [
        ("te-1", true, None),
        ("te-2", true, Some("te-1")),
        ("te-1", false, None),
        ("te-2", true, None),
        ("te-3", true, Some("te-2")),
        ("te-2", false, None),
        ("te-3", true, None),
    ];

    for (minute, (id, is_start, blocked_by)) in steps.into_iter().enumerate() {
        let at = t0 + TimeDelta::minutes(minute as i64);
        let result = if is_start {
            lifecycle.start(id, at).await
        } else {
            lifecycle.stop(id, at).await
        };
        match (blocked_by, result) {
            (None, Ok(())) => {}
            (Some(running), Err(ServiceError::Conflict { existing, .. })) => {
                assert_eq!(existing.map(|e| e.id), Some(running.to_string()), "step {minute}");
            }
            (expected, outcome) => {
                panic!("step {minute} on {id}: expected blocker {expected:?}, got {outcome:?}")
            }
        }
        assert!(lifecycle.in_progress().await <= 1);
    }
    assert_eq!(lifecycle.in_progress().await, 1);
}

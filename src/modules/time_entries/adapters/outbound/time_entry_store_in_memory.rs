// In memory implementation of the TimeEntryStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store entries in a map keyed by id.
// - Enforce optimistic concurrency and the single in-progress entry per user
//   under one write lock.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    TimeEntryPage, TimeEntryStore, TimeEntryStoreError,
};
use crate::modules::time_entries::core::filter::TimeEntryFilter;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    entries: RwLock<HashMap<String, TimeEntry>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays every `save` before it takes the write lock, widening the window
    /// between a handler's reads and its write.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), TimeEntryStoreError> {
        if self.is_offline {
            return Err(TimeEntryStoreError::Backend(
                "Time entry store offline".into(),
            ));
        }
        Ok(())
    }
}

fn newest_first(a: &TimeEntry, b: &TimeEntry) -> std::cmp::Ordering {
    b.start_time.cmp(&a.start_time).then_with(|| a.id.cmp(&b.id))
}

#[async_trait::async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn find_by_id(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<TimeEntry>, TimeEntryStoreError> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .get(id)
            .filter(|e| e.user_id == user_id)
            .cloned())
    }

    async fn find_in_progress(&self, user_id: &str) -> Result<Vec<TimeEntry>, TimeEntryStoreError> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .values()
            .filter(|e| e.user_id == user_id && e.is_in_progress())
            .cloned()
            .collect())
    }

    async fn save(
        &self,
        entry: TimeEntry,
        expected_version: i64,
    ) -> Result<TimeEntry, TimeEntryStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.entries.write().await;
        let actual = guard.get(&entry.id).map(|e| e.version).unwrap_or(0);
        if actual != expected_version {
            return Err(TimeEntryStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        if entry.is_in_progress() {
            if let Some(other) = guard
                .values()
                .find(|o| o.user_id == entry.user_id && o.id != entry.id && o.is_in_progress())
            {
                return Err(TimeEntryStoreError::ProgressConflict(Box::new(other.clone())));
            }
        }

        let stored = TimeEntry {
            version: expected_version + 1,
            ..entry
        };
        guard.insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<(), TimeEntryStoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        match guard.get(id) {
            Some(e) if e.user_id == user_id => {
                guard.remove(id);
                Ok(())
            }
            _ => Err(TimeEntryStoreError::NotFound(id.to_string())),
        }
    }

    async fn list(
        &self,
        user_id: &str,
        filter: &TimeEntryFilter,
        skip: u64,
        limit: u64,
    ) -> Result<TimeEntryPage, TimeEntryStoreError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;

        let mut items: Vec<TimeEntry> = guard
            .values()
            .filter(|e| e.user_id == user_id && filter.matches(e))
            .cloned()
            .collect();
        items.sort_by(newest_first);

        let total = items.len() as u64;
        let entries = items
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect();
        Ok(TimeEntryPage { entries, total })
    }

    async fn find_by_tasks(
        &self,
        user_id: &str,
        task_ids: &[String],
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<TimeEntry>, TimeEntryStoreError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        let mut items: Vec<TimeEntry> = guard
            .values()
            .filter(|e| e.user_id == user_id && task_ids.contains(&e.task_id))
            .filter(|e| window.is_none_or(|(from, until)| e.start_time >= from && e.start_time < until))
            .cloned()
            .collect();
        items.sort_by(newest_first);
        Ok(items)
    }
}

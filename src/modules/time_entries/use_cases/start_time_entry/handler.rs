use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::decide::{Decision, decide_start};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;
use crate::shared::core::errors::{ServiceError, require_id};
use std::sync::Arc;

/// Starts live tracking of a time entry.
///
/// The in-progress scan below only produces an early, descriptive conflict.
/// The store's conditional `save` re-checks the invariant atomically, so a
/// concurrent start that slips past the scan still ends in a conflict.
pub struct StartTimeEntryHandler<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> StartTimeEntryHandler<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: StartTimeEntry) -> Result<TimeEntry, ServiceError> {
        require_id("timeEntryId", &command.time_entry_id)?;

        let entry = self
            .store
            .find_by_id(&command.time_entry_id, &command.user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("time entry {}", command.time_entry_id)))?;

        if let Some(existing) = self
            .store
            .find_in_progress(&command.user_id)
            .await?
            .into_iter()
            .find(|e| e.id != entry.id)
        {
            tracing::debug!(existing = %existing.id, "another time entry is in progress");
            return Err(ServiceError::in_progress_conflict(existing));
        }

        match decide_start(&entry, command.started_at) {
            Decision::Accepted { entry: started } => {
                let saved = self.store.save(started, entry.version).await?;
                tracing::info!(time_entry_id = %saved.id, "time entry started");
                Ok(saved)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}

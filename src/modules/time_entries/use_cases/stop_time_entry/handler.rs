use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::decide::{Decision, decide_stop};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::stop_time_entry::command::StopTimeEntry;
use crate::shared::core::errors::{ServiceError, require_id};
use std::sync::Arc;

pub struct StopTimeEntryHandler<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> StopTimeEntryHandler<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: StopTimeEntry) -> Result<TimeEntry, ServiceError> {
        require_id("timeEntryId", &command.time_entry_id)?;

        let entry = self
            .store
            .find_by_id(&command.time_entry_id, &command.user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("time entry {}", command.time_entry_id)))?;

        match decide_stop(&entry, command.stopped_at) {
            Decision::Accepted { entry: stopped } => {
                let saved = self.store.save(stopped, entry.version).await?;
                tracing::info!(
                    time_entry_id = %saved.id,
                    total_hours = saved.total_duration_in_hour,
                    "time entry stopped"
                );
                Ok(saved)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}

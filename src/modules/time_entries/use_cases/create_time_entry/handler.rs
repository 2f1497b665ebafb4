use crate::modules::catalog::adapters::outbound::stores::TaskStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::decide::{Decision, decide_create};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::shared::core::errors::{ServiceError, require_id};
use std::sync::Arc;

/// Records a manual time entry. Manual entries are never checked for overlap
/// with other entries of the same task or time window.
pub struct CreateTimeEntryHandler<TStore, TTasks>
where
    TStore: TimeEntryStore + 'static,
    TTasks: TaskStore + 'static,
{
    store: Arc<TStore>,
    tasks: Arc<TTasks>,
}

impl<TStore, TTasks> CreateTimeEntryHandler<TStore, TTasks>
where
    TStore: TimeEntryStore + 'static,
    TTasks: TaskStore + 'static,
{
    pub fn new(store: Arc<TStore>, tasks: Arc<TTasks>) -> Self {
        Self { store, tasks }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: CreateTimeEntry) -> Result<TimeEntry, ServiceError> {
        require_id("timeEntryId", &command.time_entry_id)?;
        require_id("taskId", &command.task_id)?;

        let decision = decide_create(
            command.time_entry_id,
            command.task_id,
            command.user_id,
            command.start_time,
            command.total_duration_in_hour,
            command.created_at,
        );
        let entry = match decision {
            Decision::Accepted { entry } => entry,
            Decision::Rejected { reason } => return Err(reason.into()),
        };

        if self.tasks.find_task(&entry.task_id, &entry.user_id).await?.is_none() {
            return Err(ServiceError::NotFound(format!("task {}", entry.task_id)));
        }

        let saved = self.store.save(entry, 0).await?;
        tracing::info!(time_entry_id = %saved.id, "time entry created");
        Ok(saved)
    }
}

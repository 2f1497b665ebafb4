use crate::modules::catalog::adapters::outbound::stores::TaskStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::decide::{Decision, decide_update};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::errors::{ServiceError, require_id};
use std::sync::Arc;

pub struct UpdateTimeEntryHandler<TStore, TTasks>
where
    TStore: TimeEntryStore + 'static,
    TTasks: TaskStore + 'static,
{
    store: Arc<TStore>,
    tasks: Arc<TTasks>,
}

impl<TStore, TTasks> UpdateTimeEntryHandler<TStore, TTasks>
where
    TStore: TimeEntryStore + 'static,
    TTasks: TaskStore + 'static,
{
    pub fn new(store: Arc<TStore>, tasks: Arc<TTasks>) -> Self {
        Self { store, tasks }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: UpdateTimeEntry) -> Result<TimeEntry, ServiceError> {
        require_id("timeEntryId", &command.time_entry_id)?;
        if let Some(task_id) = &command.changes.task_id {
            require_id("taskId", task_id)?;
        }

        let entry = self
            .store
            .find_by_id(&command.time_entry_id, &command.user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("time entry {}", command.time_entry_id)))?;

        let updated = match decide_update(&entry, command.changes, command.updated_at) {
            Decision::Accepted { entry } => entry,
            Decision::Rejected { reason } => return Err(reason.into()),
        };

        if updated.task_id != entry.task_id
            && self
                .tasks
                .find_task(&updated.task_id, &updated.user_id)
                .await?
                .is_none()
        {
            return Err(ServiceError::NotFound(format!("task {}", updated.task_id)));
        }

        Ok(self.store.save(updated, entry.version).await?)
    }
}

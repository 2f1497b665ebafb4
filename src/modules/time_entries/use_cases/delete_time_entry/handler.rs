use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::shared::core::errors::{ServiceError, require_id};
use std::sync::Arc;

pub struct DeleteTimeEntryHandler<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteTimeEntryHandler<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, time_entry_id: &str, user_id: &str) -> Result<(), ServiceError> {
        require_id("timeEntryId", time_entry_id)?;
        self.store.delete(time_entry_id, user_id).await?;
        tracing::info!(time_entry_id, "time entry deleted");
        Ok(())
    }
}

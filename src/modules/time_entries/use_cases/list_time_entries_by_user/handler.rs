use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::query::{
    ListTimeEntriesByUser, TimeEntryList,
};
use crate::shared::core::errors::ServiceError;
use crate::shared::core::pagination::PageInfo;
use std::sync::Arc;

pub struct ListTimeEntriesByUserHandler<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListTimeEntriesByUserHandler<TStore>
where
    TStore: TimeEntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, query: ListTimeEntriesByUser) -> Result<TimeEntryList, ServiceError> {
        let page = self
            .store
            .list(
                &query.user_id,
                &query.filter,
                query.page.skip(),
                query.page.limit,
            )
            .await?;
        Ok(TimeEntryList {
            entries: page.entries,
            pagination: PageInfo::new(query.page, page.total),
        })
    }
}

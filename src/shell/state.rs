use crate::modules::catalog::adapters::outbound::stores_in_memory::InMemoryCatalog;
use crate::modules::reports::adapters::outbound::report_store_in_memory::InMemoryReportStore;
use crate::modules::reports::use_cases::generate_report::handler::GenerateReportHandler;
use crate::modules::reports::use_cases::list_available_months::handler::ListAvailableMonthsHandler;
use crate::modules::reports::use_cases::read_reports::handler::ReadReportsHandler;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::use_cases::create_time_entry::handler::CreateTimeEntryHandler;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::ListTimeEntriesByUserHandler;
use crate::modules::time_entries::use_cases::start_time_entry::handler::StartTimeEntryHandler;
use crate::modules::time_entries::use_cases::stop_time_entry::handler::StopTimeEntryHandler;
use crate::modules::time_entries::use_cases::update_time_entry::handler::UpdateTimeEntryHandler;
use std::sync::Arc;

type Entries = InMemoryTimeEntryStore;
type Reports = InMemoryReportStore;

#[derive(Clone)]
pub struct AppState {
    pub start_handler: Arc<StartTimeEntryHandler<Entries>>,
    pub stop_handler: Arc<StopTimeEntryHandler<Entries>>,
    pub create_handler: Arc<CreateTimeEntryHandler<Entries, InMemoryCatalog>>,
    pub update_handler: Arc<UpdateTimeEntryHandler<Entries, InMemoryCatalog>>,
    pub delete_handler: Arc<DeleteTimeEntryHandler<Entries>>,
    pub list_handler: Arc<ListTimeEntriesByUserHandler<Entries>>,
    pub generate_report_handler: Arc<GenerateReportHandler<InMemoryCatalog, Entries, Reports>>,
    pub available_months_handler: Arc<ListAvailableMonthsHandler<InMemoryCatalog, Entries>>,
    pub read_reports_handler: Arc<ReadReportsHandler<Reports>>,
}

impl AppState {
    pub fn new(catalog: Arc<InMemoryCatalog>, entries: Arc<Entries>, reports: Arc<Reports>) -> Self {
        Self {
            start_handler: Arc::new(StartTimeEntryHandler::new(entries.clone())),
            stop_handler: Arc::new(StopTimeEntryHandler::new(entries.clone())),
            create_handler: Arc::new(CreateTimeEntryHandler::new(entries.clone(), catalog.clone())),
            update_handler: Arc::new(UpdateTimeEntryHandler::new(entries.clone(), catalog.clone())),
            delete_handler: Arc::new(DeleteTimeEntryHandler::new(entries.clone())),
            list_handler: Arc::new(ListTimeEntriesByUserHandler::new(entries.clone())),
            generate_report_handler: Arc::new(GenerateReportHandler::new(
                catalog.clone(),
                entries.clone(),
                reports.clone(),
            )),
            available_months_handler: Arc::new(ListAvailableMonthsHandler::new(catalog, entries)),
            read_reports_handler: Arc::new(ReadReportsHandler::new(reports)),
        }
    }

    /// State over fresh, empty time entry and report stores.
    pub fn in_memory(catalog: InMemoryCatalog) -> Self {
        Self::new(
            Arc::new(catalog),
            Arc::new(InMemoryTimeEntryStore::new()),
            Arc::new(InMemoryReportStore::new()),
        )
    }
}

use crate::modules::catalog::adapters::outbound::stores_in_memory::InMemoryCatalog;
use crate::modules::reports::adapters::outbound::report_store::ReportStore;
use crate::modules::reports::adapters::outbound::report_store_in_memory::InMemoryReportStore;
use crate::modules::reports::core::report::{NO_CONTRACT_NAME, ReportType};
use crate::modules::reports::core::summary::{ContractSummary, ReportSummary};
use crate::modules::reports::use_cases::generate_report::command::GenerateReport;
use crate::modules::reports::use_cases::generate_report::handler::GenerateReportHandler;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::use_cases::create_time_entry::command::CreateTimeEntry;
use crate::modules::time_entries::use_cases::create_time_entry::handler::CreateTimeEntryHandler;
use crate::tests::fixtures::catalog::{CatalogBuilder, USER_ID};
use crate::tests::fixtures::time_entries::TimeEntryBuilder;
use chrono::{DateTime, Utc};
use std::sync::Arc;

struct World {
    create: CreateTimeEntryHandler<InMemoryTimeEntryStore, InMemoryCatalog>,
    generate: GenerateReportHandler<InMemoryCatalog, InMemoryTimeEntryStore, InMemoryReportStore>,
    reports: Arc<InMemoryReportStore>,
}

impl World {
    fn new(catalog: InMemoryCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let entries = Arc::new(InMemoryTimeEntryStore::new());
        let reports = Arc::new(InMemoryReportStore::new());
        Self {
            create: CreateTimeEntryHandler::new(entries.clone(), catalog.clone()),
            generate: GenerateReportHandler::new(catalog, entries, reports.clone()),
            reports,
        }
    }

    async fn log(&self, id: &str, task_id: &str, hours: f64) {
        self.log_at(id, task_id, hours, TimeEntryBuilder::fixed_now()).await;
    }

    async fn log_at(&self, id: &str, task_id: &str, hours: f64, start_time: DateTime<Utc>) {
        self.create
            .handle(CreateTimeEntry {
                time_entry_id: id.into(),
                task_id: task_id.into(),
                user_id: USER_ID.into(),
                start_time,
                total_duration_in_hour: hours,
                created_at: TimeEntryBuilder::fixed_now(),
            })
            .await
            .unwrap();
    }

    async fn invoice(&self) -> ReportSummary {
        self.generate
            .handle(GenerateReport {
                report_id: "rep-1".into(),
                customer_id: "cus-1".into(),
                year: 2024,
                month: 3,
                report_type: ReportType::Invoice,
                user_id: USER_ID.into(),
                generated_at: TimeEntryBuilder::fixed_now(),
            })
            .await
            .unwrap()
    }
}

fn bucket<'a>(summary: &'a ReportSummary, contract_id: Option<&str>) -> &'a ContractSummary {
    summary
        .contracts
        .iter()
        .find(|c| c.contract_id.as_deref() == contract_id)
        .expect("contract bucket should exist")
}

#[tokio::test]
async fn invoices_a_project_without_contract_at_the_customer_rate() {
    let world = World::new(
        CatalogBuilder::new()
            .customer("cus-1", 400.0, Some("USD"))
            .project("pro-1", "cus-1", None)
            .task("tas-1", "pro-1")
            .build(),
    );
    world.log("te-1", "tas-1", 8.0).await;

    let summary = world.invoice().await;

    assert_eq!(summary.contracts.len(), 1);
    let no_contract = bucket(&summary, None);
    assert_eq!(no_contract.contract_name, NO_CONTRACT_NAME);
    assert_eq!(no_contract.daily_rate, 400.0);
    assert_eq!(no_contract.currency, "USD");
    assert_eq!(no_contract.total_hours, 8.0);
    assert_eq!(no_contract.total_cost, Some(400.0));
    assert_eq!(summary.summary.total_hours, 8.0);
    assert_eq!(summary.summary.total_cost, Some(400.0));
}

#[tokio::test]
async fn invoices_two_contracts_at_their_own_rates() {
    let world = World::new(
        CatalogBuilder::new()
            .customer("cus-1", 100.0, None)
            .contract("con-400", "cus-1", 400.0, "USD")
            .contract("con-800", "cus-1", 800.0, "USD")
            .project("pro-1", "cus-1", Some("con-400"))
            .project("pro-2", "cus-1", Some("con-800"))
            .task("tas-1", "pro-1")
            .task("tas-2", "pro-2")
            .build(),
    );
    world.log("te-1", "tas-1", 8.0).await;
    world.log("te-2", "tas-2", 8.0).await;

    let summary = world.invoice().await;

    assert_eq!(summary.contracts.len(), 2);
    assert_eq!(bucket(&summary, Some("con-400")).total_cost, Some(400.0));
    assert_eq!(bucket(&summary, Some("con-800")).total_cost, Some(800.0));
    assert_eq!(summary.summary.total_hours, 16.0);
    assert_eq!(summary.summary.total_cost, Some(1200.0));
}

#[tokio::test]
async fn keeps_a_zero_rate_contract_at_zero_cost() {
    let world = World::new(
        CatalogBuilder::new()
            .customer("cus-1", 400.0, None)
            .contract("con-pro-bono", "cus-1", 0.0, "USD")
            .project("pro-1", "cus-1", Some("con-pro-bono"))
            .task("tas-1", "pro-1")
            .build(),
    );
    for day in 0..5 {
        world.log(&format!("te-{day}"), "tas-1", 8.0).await;
    }

    let summary = world.invoice().await;

    let contract = bucket(&summary, Some("con-pro-bono"));
    assert_eq!(contract.daily_rate, 0.0);
    assert_eq!(contract.total_hours, 40.0);
    assert_eq!(contract.total_cost, Some(0.0));
    assert_eq!(summary.summary.total_cost, Some(0.0));
}

#[tokio::test]
async fn stores_the_same_totals_it_returns() {
    let world = World::new(
        CatalogBuilder::new()
            .customer("cus-1", 400.0, None)
            .project("pro-1", "cus-1", None)
            .task("tas-1", "pro-1")
            .build(),
    );
    world.log("te-1", "tas-1", 2.0).await;

    let summary = world.invoice().await;
    let stored = world
        .reports
        .find_by_id(&summary.id, USER_ID)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.summary, summary.summary);
    assert_eq!(stored.contracts[0].total_cost, summary.contracts[0].total_cost);
    assert_eq!(stored.period.start_date, summary.period.start_date);
}

#[tokio::test]
async fn bills_an_entry_stamped_in_the_last_sub_millisecond_of_the_month() {
    let world = World::new(
        CatalogBuilder::new()
            .customer("cus-1", 400.0, None)
            .project("pro-1", "cus-1", None)
            .task("tas-1", "pro-1")
            .build(),
    );
    let last_instant: DateTime<Utc> = "2024-03-31T23:59:59.9995Z".parse().unwrap();
    world.log_at("te-late", "tas-1", 8.0, last_instant).await;

    let summary = world.invoice().await;

    assert_eq!(summary.summary.total_hours, 8.0);
    assert_eq!(summary.summary.total_cost, Some(400.0));
    assert_eq!(bucket(&summary, None).total_hours, 8.0);
}

// Shared test fixture for a seeded catalog.
// Every entity belongs to `USER_ID` unless stated otherwise.

use crate::modules::catalog::adapters::outbound::seed::CatalogSeed;
use crate::modules::catalog::adapters::outbound::stores_in_memory::InMemoryCatalog;
use crate::modules::catalog::core::model::{
    BillingDetails, Contract, Customer, Project, Task, User,
};
use chrono::NaiveDate;

pub const USER_ID: &str = "user-fixed-0001";

pub struct CatalogBuilder {
    inner: CatalogSeed,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            inner: CatalogSeed {
                users: vec![User {
                    id: USER_ID.to_string(),
                    first_name: "Teddy".to_string(),
                    last_name: "Test".to_string(),
                    email: "teddy@example.com".to_string(),
                }],
                ..CatalogSeed::default()
            },
        }
    }

    pub fn customer(mut self, id: &str, daily_rate: f64, currency: Option<&str>) -> Self {
        self.inner.customers.push(Customer {
            id: id.to_string(),
            user_id: USER_ID.to_string(),
            name: format!("Customer {id}"),
            address: Some("1 Main Street".to_string()),
            billing_details: BillingDetails {
                daily_rate,
                currency: currency.map(str::to_string),
            },
        });
        self
    }

    pub fn contract(mut self, id: &str, customer_id: &str, daily_rate: f64, currency: &str) -> Self {
        self.inner.contracts.push(Contract {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            name: format!("Contract {id}"),
            daily_rate,
            currency: currency.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        });
        self
    }

    pub fn project(mut self, id: &str, customer_id: &str, contract_id: Option<&str>) -> Self {
        self.inner.projects.push(Project {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            user_id: USER_ID.to_string(),
            name: format!("Project {id}"),
            contract_id: contract_id.map(str::to_string),
        });
        self
    }

    pub fn task(mut self, id: &str, project_id: &str) -> Self {
        self.inner.tasks.push(Task {
            id: id.to_string(),
            project_id: project_id.to_string(),
            user_id: USER_ID.to_string(),
            name: format!("Task {id}"),
            description: None,
            url: None,
        });
        self
    }

    pub fn seed(self) -> CatalogSeed {
        self.inner
    }

    pub fn build(self) -> InMemoryCatalog {
        InMemoryCatalog::from_seed(self.inner).expect("catalog fixture should be valid")
    }
}

// In memory implementation of the catalog ports.
//
// Purpose
// - Serve the catalog collaborators to the billing core without a database.
//
// Responsibilities
// - Hold users, customers, contracts, projects and tasks keyed by id.
// - Scope user-owned lookups to the calling user.

use crate::modules::catalog::adapters::outbound::seed::{CatalogSeed, SeedError, validate_contract};
use crate::modules::catalog::adapters::outbound::stores::{
    ContractStore, CustomerStore, ProjectStore, TaskStore, UserStore,
};
use crate::modules::catalog::core::model::{Contract, Customer, Project, Task, User};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCatalog {
    users: RwLock<HashMap<String, User>>,
    customers: RwLock<HashMap<String, Customer>>,
    contracts: RwLock<HashMap<String, Contract>>,
    projects: RwLock<HashMap<String, Project>>,
    tasks: RwLock<HashMap<String, Task>>,
    is_offline: bool,
}

fn by_id<T>(items: Vec<T>, id: impl Fn(&T) -> String) -> HashMap<String, T> {
    items.into_iter().map(|item| (id(&item), item)).collect()
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: CatalogSeed) -> Result<Self, SeedError> {
        for contract in &seed.contracts {
            validate_contract(contract)?;
        }
        Ok(Self {
            users: RwLock::new(by_id(seed.users, |u| u.id.clone())),
            customers: RwLock::new(by_id(seed.customers, |c| c.id.clone())),
            contracts: RwLock::new(by_id(seed.contracts, |c| c.id.clone())),
            projects: RwLock::new(by_id(seed.projects, |p| p.id.clone())),
            tasks: RwLock::new(by_id(seed.tasks, |t| t.id.clone())),
            is_offline: false,
        })
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Catalog offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TaskStore for InMemoryCatalog {
    async fn find_tasks_by_projects(
        &self,
        project_ids: &[String],
        user_id: &str,
    ) -> anyhow::Result<Vec<Task>> {
        self.ensure_online()?;
        let guard = self.tasks.read().await;
        let mut tasks: Vec<Task> = guard
            .values()
            .filter(|t| t.user_id == user_id && project_ids.contains(&t.project_id))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(tasks)
    }

    async fn find_task(&self, task_id: &str, user_id: &str) -> anyhow::Result<Option<Task>> {
        self.ensure_online()?;
        Ok(self
            .tasks
            .read()
            .await
            .get(task_id)
            .filter(|t| t.user_id == user_id)
            .cloned())
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryCatalog {
    async fn find_projects_by_customer(
        &self,
        customer_id: &str,
        user_id: &str,
    ) -> anyhow::Result<Vec<Project>> {
        self.ensure_online()?;
        let guard = self.projects.read().await;
        let mut projects: Vec<Project> = guard
            .values()
            .filter(|p| p.customer_id == customer_id && p.user_id == user_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(projects)
    }
}

#[async_trait::async_trait]
impl ContractStore for InMemoryCatalog {
    async fn find_contracts_by_ids(&self, ids: &[String]) -> anyhow::Result<Vec<Contract>> {
        self.ensure_online()?;
        let guard = self.contracts.read().await;
        Ok(ids.iter().filter_map(|id| guard.get(id).cloned()).collect())
    }
}

#[async_trait::async_trait]
impl CustomerStore for InMemoryCatalog {
    async fn find_customer_by_id(
        &self,
        id: &str,
        user_id: &str,
    ) -> anyhow::Result<Option<Customer>> {
        self.ensure_online()?;
        Ok(self
            .customers
            .read()
            .await
            .get(id)
            .filter(|c| c.user_id == user_id)
            .cloned())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryCatalog {
    async fn find_user_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        self.ensure_online()?;
        Ok(self.users.read().await.get(id).cloned())
    }
}

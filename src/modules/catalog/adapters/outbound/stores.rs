// Outbound ports onto the catalog collaborators.
//
// The billing core reads customers, contracts, projects, tasks and users but
// never writes them. Every lookup is scoped to the calling user where the
// entity is user-owned.

use crate::modules::catalog::core::model::{Contract, Customer, Project, Task, User};
use async_trait::async_trait;

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn find_tasks_by_projects(
        &self,
        project_ids: &[String],
        user_id: &str,
    ) -> anyhow::Result<Vec<Task>>;

    async fn find_task(&self, task_id: &str, user_id: &str) -> anyhow::Result<Option<Task>>;
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find_projects_by_customer(
        &self,
        customer_id: &str,
        user_id: &str,
    ) -> anyhow::Result<Vec<Project>>;
}

#[async_trait]
pub trait ContractStore: Send + Sync {
    async fn find_contracts_by_ids(&self, ids: &[String]) -> anyhow::Result<Vec<Contract>>;
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn find_customer_by_id(
        &self,
        id: &str,
        user_id: &str,
    ) -> anyhow::Result<Option<Customer>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
}

/// Every catalog collaborator the report engine reads from.
pub trait Catalog: TaskStore + ProjectStore + ContractStore + CustomerStore + UserStore {}

impl<T> Catalog for T where T: TaskStore + ProjectStore + ContractStore + CustomerStore + UserStore {}

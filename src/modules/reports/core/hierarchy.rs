// Report skeleton: contract buckets holding project buckets holding task
// buckets, all zeroed. Each bucket resolves its billing rate once, here.

use crate::modules::catalog::core::model::{Contract, Customer, Project, Task};
use crate::modules::reports::core::rate::{BillingRate, ContractBilling, resolve_daily_rate};
use crate::modules::reports::core::report::{ContractGroup, NO_CONTRACT_NAME, ReportType};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskBucket {
    pub task_id: String,
    pub total_hours: f64,
    pub total_cost: Option<f64>,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBucket {
    pub project_id: String,
    pub total_hours: f64,
    pub total_cost: Option<f64>,
    pub tasks: BTreeMap<String, TaskBucket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractBucket {
    pub group: ContractGroup,
    pub contract_name: String,
    pub rate: BillingRate,
    pub total_hours: f64,
    pub total_cost: Option<f64>,
    pub projects: BTreeMap<String, ProjectBucket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
    pub report_type: ReportType,
    pub contracts: BTreeMap<ContractGroup, ContractBucket>,
    task_index: HashMap<String, (ContractGroup, String)>,
}

pub fn build_hierarchy(
    report_type: ReportType,
    customer: &Customer,
    projects: &[Project],
    tasks: &[Task],
    contracts: &[Contract],
) -> Hierarchy {
    let contracts_by_id: HashMap<&str, &Contract> =
        contracts.iter().map(|c| (c.id.as_str(), c)).collect();
    let initial_cost = report_type.initial_cost();

    let mut buckets: BTreeMap<ContractGroup, ContractBucket> = BTreeMap::new();
    let mut project_groups: HashMap<&str, ContractGroup> = HashMap::new();

    for project in projects {
        let group = ContractGroup::for_project(project.contract_id.as_deref());
        let bucket = buckets.entry(group.clone()).or_insert_with(|| {
            let contract = group.contract_id().and_then(|id| contracts_by_id.get(id));
            let billing = contract.map(|c| ContractBilling::from(*c));
            let contract_name = match (&group, contract) {
                (ContractGroup::NoContract, _) => NO_CONTRACT_NAME.to_string(),
                (_, Some(c)) => c.name.clone(),
                (ContractGroup::Contract(id), None) => id.clone(),
            };
            ContractBucket {
                group: group.clone(),
                contract_name,
                rate: resolve_daily_rate(billing.as_ref(), &customer.billing_details),
                total_hours: 0.0,
                total_cost: initial_cost,
                projects: BTreeMap::new(),
            }
        });
        bucket.projects.insert(
            project.id.clone(),
            ProjectBucket {
                project_id: project.id.clone(),
                total_hours: 0.0,
                total_cost: initial_cost,
                tasks: BTreeMap::new(),
            },
        );
        project_groups.insert(project.id.as_str(), group);
    }

    let mut task_index = HashMap::new();
    for task in tasks {
        let Some(group) = project_groups.get(task.project_id.as_str()) else {
            continue;
        };
        if let Some(project) = buckets
            .get_mut(group)
            .and_then(|b| b.projects.get_mut(&task.project_id))
        {
            project.tasks.insert(
                task.id.clone(),
                TaskBucket {
                    task_id: task.id.clone(),
                    total_hours: 0.0,
                    total_cost: initial_cost,
                    entry_count: 0,
                },
            );
            task_index.insert(task.id.clone(), (group.clone(), task.project_id.clone()));
        }
    }

    Hierarchy {
        report_type,
        contracts: buckets,
        task_index,
    }
}

impl Hierarchy {
    pub fn task_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.task_index.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Adds the entry's hours, and cost for invoices, to its task, project and
    /// contract buckets. Returns the amounts added, or `None` if the entry's
    /// task is not part of this hierarchy.
    pub fn record(&mut self, entry: &TimeEntry) -> Option<(f64, Option<f64>)> {
        let (group, project_id) = self.task_index.get(&entry.task_id)?;
        let contract = self.contracts.get_mut(group)?;
        let hours = entry.total_duration_in_hour;
        let cost = match self.report_type {
            ReportType::Invoice => Some(contract.rate.hourly_rate() * hours),
            ReportType::Timesheet => None,
        };

        let project = contract.projects.get_mut(project_id)?;
        let task = project.tasks.get_mut(&entry.task_id)?;
        task.entry_count += 1;
        task.total_hours += hours;
        task.total_cost = add_cost(task.total_cost, cost);
        project.total_hours += hours;
        project.total_cost = add_cost(project.total_cost, cost);
        contract.total_hours += hours;
        contract.total_cost = add_cost(contract.total_cost, cost);
        Some((hours, cost))
    }
}

pub(crate) fn add_cost(total: Option<f64>, cost: Option<f64>) -> Option<f64> {
    match (total, cost) {
        (Some(t), Some(c)) => Some(t + c),
        (total, _) => total,
    }
}

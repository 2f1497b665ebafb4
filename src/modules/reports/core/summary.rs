// Display shape of a report: the stored totals with customer, user, project
// and task names resolved from the catalog entities loaded for generation.

use crate::modules::catalog::core::model::{Customer, Project, Task, User};
use crate::modules::reports::core::report::{Report, ReportPeriod, ReportTotals, ReportType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub task_id: String,
    pub task_name: String,
    pub total_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: String,
    pub project_name: String,
    pub total_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub tasks: Vec<TaskSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub contract_id: Option<String>,
    pub contract_name: String,
    pub daily_rate: f64,
    pub currency: String,
    pub total_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub projects: Vec<ProjectSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub id: String,
    pub report_type: ReportType,
    pub generation_date: DateTime<Utc>,
    pub period: ReportPeriod,
    pub customer: CustomerSummary,
    pub generated_by: Option<UserSummary>,
    pub summary: ReportTotals,
    pub contracts: Vec<ContractSummary>,
}

fn name_of(names: &HashMap<&str, &str>, id: &str) -> String {
    names
        .get(id)
        .map_or_else(|| id.to_string(), |name| name.to_string())
}

pub fn summarize(
    report: &Report,
    customer: &Customer,
    user: Option<&User>,
    projects: &[Project],
    tasks: &[Task],
) -> ReportSummary {
    let project_names: HashMap<&str, &str> = projects
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();
    let task_names: HashMap<&str, &str> = tasks
        .iter()
        .map(|t| (t.id.as_str(), t.name.as_str()))
        .collect();

    let contracts = report
        .contracts
        .iter()
        .map(|contract| ContractSummary {
            contract_id: contract.contract_id.clone(),
            contract_name: contract.contract_name.clone(),
            daily_rate: contract.daily_rate,
            currency: contract.currency.clone(),
            total_hours: contract.total_hours,
            total_cost: contract.total_cost,
            projects: contract
                .projects
                .iter()
                .map(|project| ProjectSummary {
                    project_id: project.project_id.clone(),
                    project_name: name_of(&project_names, &project.project_id),
                    total_hours: project.total_hours,
                    total_cost: project.total_cost,
                    tasks: project
                        .tasks
                        .iter()
                        .map(|task| TaskSummary {
                            task_id: task.task_id.clone(),
                            task_name: name_of(&task_names, &task.task_id),
                            total_hours: task.total_hours,
                            total_cost: task.total_cost,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    ReportSummary {
        id: report.id.clone(),
        report_type: report.report_type,
        generation_date: report.generation_date,
        period: report.period.clone(),
        customer: CustomerSummary {
            id: customer.id.clone(),
            name: customer.name.clone(),
            address: customer.address.clone(),
        },
        generated_by: user.map(|u| UserSummary {
            id: u.id.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            email: u.email.clone(),
        }),
        summary: report.summary.clone(),
        contracts,
    }
}

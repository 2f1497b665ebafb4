// Immutable report snapshot, stored once and read back unchanged.
//
// `total_cost` is `Some` at every level of an invoice and `None` at every
// level of a timesheet, where it is left out of the serialized document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_CONTRACT_NAME: &str = "No Contract";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Timesheet,
    Invoice,
}

impl ReportType {
    pub fn initial_cost(&self) -> Option<f64> {
        match self {
            ReportType::Timesheet => None,
            ReportType::Invoice => Some(0.0),
        }
    }
}

/// Aggregation key of a contract bucket. Orders contracts by id with the
/// no-contract bucket last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContractGroup {
    Contract(String),
    NoContract,
}

impl ContractGroup {
    pub fn for_project(contract_id: Option<&str>) -> Self {
        match contract_id {
            Some(id) => ContractGroup::Contract(id.to_string()),
            None => ContractGroup::NoContract,
        }
    }

    pub fn contract_id(&self) -> Option<&str> {
        match self {
            ContractGroup::Contract(id) => Some(id),
            ContractGroup::NoContract => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTotals {
    pub task_id: String,
    pub total_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTotals {
    pub project_id: String,
    pub total_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub tasks: Vec<TaskTotals>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTotals {
    pub contract_id: Option<String>,
    pub contract_name: String,
    pub daily_rate: f64,
    pub currency: String,
    pub total_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub projects: Vec<ProjectTotals>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub total_days: u32,
    pub total_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub report_type: ReportType,
    pub customer_id: String,
    pub user_id: String,
    pub generation_date: DateTime<Utc>,
    pub period: ReportPeriod,
    pub summary: ReportTotals,
    pub contracts: Vec<ContractTotals>,
}

use crate::modules::reports::core::hierarchy::{Hierarchy, add_cost};
use crate::modules::reports::core::period::MonthWindow;
use crate::modules::reports::core::report::{ContractTotals, ProjectTotals, TaskTotals};
use crate::modules::time_entries::core::time_entry::TimeEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub contracts: Vec<ContractTotals>,
    pub total_hours: f64,
    pub total_cost: Option<f64>,
}

/// Rolls in-window entries up the hierarchy, then drops tasks that received
/// no entry, projects left without tasks and contracts left without projects.
///
/// Entries still in progress contribute only the hours accumulated so far.
pub fn aggregate(mut hierarchy: Hierarchy, entries: &[TimeEntry], window: &MonthWindow) -> Aggregation {
    let mut total_hours = 0.0;
    let mut total_cost = hierarchy.report_type.initial_cost();

    for entry in entries.iter().filter(|e| window.contains(e.start_time)) {
        if let Some((hours, cost)) = hierarchy.record(entry) {
            total_hours += hours;
            total_cost = add_cost(total_cost, cost);
        }
    }

    let contracts = hierarchy
        .contracts
        .into_values()
        .filter_map(|contract| {
            let projects: Vec<ProjectTotals> = contract
                .projects
                .into_values()
                .filter_map(|project| {
                    let tasks: Vec<TaskTotals> = project
                        .tasks
                        .into_values()
                        .filter(|task| task.entry_count > 0)
                        .map(|task| TaskTotals {
                            task_id: task.task_id,
                            total_hours: task.total_hours,
                            total_cost: task.total_cost,
                        })
                        .collect();
                    (!tasks.is_empty()).then(|| ProjectTotals {
                        project_id: project.project_id,
                        total_hours: project.total_hours,
                        total_cost: project.total_cost,
                        tasks,
                    })
                })
                .collect();
            (!projects.is_empty()).then(|| ContractTotals {
                contract_id: contract.group.contract_id().map(str::to_string),
                contract_name: contract.contract_name,
                daily_rate: contract.rate.daily_rate,
                currency: contract.rate.currency,
                total_hours: contract.total_hours,
                total_cost: contract.total_cost,
                projects,
            })
        })
        .collect();

    Aggregation {
        contracts,
        total_hours,
        total_cost,
    }
}

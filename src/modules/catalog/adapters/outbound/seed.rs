// Start-up snapshot of the catalog collaborators, read from a JSON document.

use crate::modules::catalog::core::model::{Contract, Customer, Project, Task, User};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read catalog seed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid contract {contract_id}: {reason}")]
    InvalidContract { contract_id: String, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogSeed {
    pub users: Vec<User>,
    pub customers: Vec<Customer>,
    pub contracts: Vec<Contract>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

impl CatalogSeed {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        let seed = serde_json::from_str(&json)?;
        Ok(seed)
    }
}

/// Write-time rules for contracts: the validity window must be non-empty and
/// the daily rate a non-negative number.
pub fn validate_contract(contract: &Contract) -> Result<(), SeedError> {
    if contract.start_date >= contract.end_date {
        return Err(SeedError::InvalidContract {
            contract_id: contract.id.clone(),
            reason: "start date must be before end date".into(),
        });
    }
    if !contract.daily_rate.is_finite() || contract.daily_rate < 0.0 {
        return Err(SeedError::InvalidContract {
            contract_id: contract.id.clone(),
            reason: "daily rate must be a non-negative number".into(),
        });
    }
    Ok(())
}

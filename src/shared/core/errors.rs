// Error kinds surfaced by every lifecycle and report use case.
//
// Validation errors are raised before any side effect. Failures of the
// outbound ports are wrapped as `Unavailable`, keeping only their message.

use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStoreError;
use crate::modules::time_entries::core::decide::DecideError;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {message}")]
    Conflict {
        message: String,
        existing: Option<Box<TimeEntry>>,
    },

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Unavailable(_) => "UNAVAILABLE",
        }
    }

    pub fn in_progress_conflict(existing: TimeEntry) -> Self {
        Self::Conflict {
            message: format!("time entry {} is already in progress", existing.id),
            existing: Some(Box::new(existing)),
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unavailable(format!("{err:#}"))
    }
}

impl From<TimeEntryStoreError> for ServiceError {
    fn from(err: TimeEntryStoreError) -> Self {
        match err {
            TimeEntryStoreError::ProgressConflict(existing) => Self::in_progress_conflict(*existing),
            TimeEntryStoreError::VersionMismatch { .. } => Self::Conflict {
                message: format!("time entry was modified concurrently ({err})"),
                existing: None,
            },
            TimeEntryStoreError::NotFound(id) => Self::NotFound(format!("time entry {id}")),
            TimeEntryStoreError::Backend(message) => Self::Unavailable(message),
        }
    }
}

impl From<DecideError> for ServiceError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::AlreadyInProgress | DecideError::NotInProgress => {
                Self::InvalidState(reason.to_string())
            }
            DecideError::ProgressManagedByLifecycle | DecideError::InvalidDuration => {
                Self::InvalidRequest(reason.to_string())
            }
        }
    }
}

/// Rejects blank identifiers before they reach a port.
pub fn require_id(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

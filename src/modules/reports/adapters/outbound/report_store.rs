use crate::modules::reports::core::report::Report;
use crate::shared::core::errors::ServiceError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportStoreError {
    #[error("report {0} already exists")]
    Duplicate(String),

    #[error("{0}")]
    Backend(String),
}

impl From<ReportStoreError> for ServiceError {
    fn from(err: ReportStoreError) -> Self {
        match err {
            ReportStoreError::Duplicate(_) => ServiceError::Conflict {
                message: err.to_string(),
                existing: None,
            },
            ReportStoreError::Backend(message) => ServiceError::Unavailable(message),
        }
    }
}

/// Write-once storage of report snapshots.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert(&self, report: Report) -> Result<(), ReportStoreError>;

    async fn find_by_id(&self, id: &str, user_id: &str) -> Result<Option<Report>, ReportStoreError>;

    /// Reports of the user, newest generation first.
    async fn list(
        &self,
        user_id: &str,
        customer_id: Option<&str>,
    ) -> Result<Vec<Report>, ReportStoreError>;
}

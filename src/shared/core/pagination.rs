use crate::shared::core::errors::ServiceError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// One-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Result<Self, ServiceError> {
        if page < 1 {
            return Err(ServiceError::InvalidRequest("page must be at least 1".into()));
        }
        if limit < 1 {
            return Err(ServiceError::InvalidRequest("limit must be at least 1".into()));
        }
        Ok(Self { page, limit })
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

impl PageInfo {
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            total,
            page: request.page,
            limit: request.limit,
            pages: total.div_ceil(request.limit),
        }
    }
}

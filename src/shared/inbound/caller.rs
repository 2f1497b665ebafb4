use crate::shared::inbound::api_error::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity of the calling user, read from the `x-user-id` header set by the
/// authenticating gateway. Rejects with 401 when the header is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId(pub String);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| CallerId(v.to_string()))
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
    }
}

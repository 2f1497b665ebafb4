use crate::shared::core::errors::ServiceError;
use async_graphql::ErrorExtensions;

/// Maps a service error onto a GraphQL error carrying a `code` extension.
pub fn gql_error(err: ServiceError) -> async_graphql::Error {
    if let ServiceError::Unavailable(message) = &err {
        tracing::error!("Backend unavailable: {}", message);
    }
    let code = err.code();
    let existing_id = match &err {
        ServiceError::Conflict {
            existing: Some(existing),
            ..
        } => Some(existing.id.clone()),
        _ => None,
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| {
        e.set("code", code);
        if let Some(id) = &existing_id {
            e.set("existingId", id.as_str());
        }
    })
}

/// GraphQL counterpart of the `x-user-id` check: the `userId` argument must
/// name a caller. Returns the trimmed id.
pub fn require_caller(user_id: &str) -> async_graphql::Result<String> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(async_graphql::Error::new("Not authenticated")
            .extend_with(|_, e| e.set("code", "UNAUTHENTICATED")));
    }
    Ok(user_id.to_string())
}

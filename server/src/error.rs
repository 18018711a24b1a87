//! Server errors and the mapping of storage failures onto GraphQL errors.

use async_graphql::ErrorExtensions;
use galactic_storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

/// Result type for server setup.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors raised while setting up the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configured CORS origin is not a valid header value.
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// Translates a storage failure into a GraphQL error with a machine
/// readable `extensions.code`.
pub fn graphql_error(err: StorageError) -> async_graphql::Error {
    let code = match &err {
        StorageError::NotFound { .. } => "NOT_FOUND",
        StorageError::Unavailable(_) => "UNAVAILABLE",
        StorageError::SelectionFailed(_) => "SELECTION_FAILED",
        _ => {
            error!("Query failed: {}", err);
            "INTERNAL_SERVER_ERROR"
        }
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

/// A storage task that panicked or was cancelled on the blocking pool.
pub fn join_error(err: JoinError) -> async_graphql::Error {
    error!("spawn_blocking failed: {}", err);
    async_graphql::Error::new("Internal server error")
        .extend_with(|_, ext| ext.set("code", "INTERNAL_SERVER_ERROR"))
}

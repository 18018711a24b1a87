//! Error types for the storage layer.

use galactic_model::{EntityId, EntityKind};
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Seed file could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No row matches the requested id.
    #[error("{} with ID {id} not found", .kind.noun())]
    NotFound { kind: EntityKind, id: EntityId },

    /// A random pick was requested from an empty collection.
    #[error("No {} available", .0.plural())]
    Unavailable(EntityKind),

    /// The collection is not empty but the random pick returned nothing.
    #[error("Failed to get random {0}")]
    SelectionFailed(EntityKind),

    /// The shared connection lock was poisoned by a panicking holder.
    #[error("database connection lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    /// Whether the caller may reasonably retry the same request.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SelectionFailed(_))
    }
}

//! Error types for the model layer.

use crate::entity::EntityKind;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when working with entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two entities of different kinds were compared.
    #[error("cannot compare different entity types: {left} vs {right}")]
    TypeMismatch { left: EntityKind, right: EntityKind },

    /// A category name did not match any collection.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

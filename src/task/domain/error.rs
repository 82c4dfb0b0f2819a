//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyName,
}

/// Error returned while parsing sort parameters from the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort parameter: {0}")]
pub struct ParseSortError(pub String);

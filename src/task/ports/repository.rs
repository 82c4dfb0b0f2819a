//! Repository port for task persistence, lookup, and search.

use crate::task::domain::{PageRequest, Task, TaskDraft, TaskId, TaskPage};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations back the service layer with a relational or
/// in-memory store; the service never observes which.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task and returns it with the assigned identifier.
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Loads one page of tasks plus the collection total.
    ///
    /// Without a sort override the page is ordered by identifier
    /// ascending so pagination is deterministic across backends.
    async fn find_page(&self, request: PageRequest) -> TaskRepositoryResult<TaskPage>;

    /// Deletes the task with the given identifier.
    ///
    /// Deleting an absent identifier is a no-op.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns every task whose name or description contains `query` as
    /// a substring. An empty query matches every task.
    async fn search_name_or_description(&self, query: &str) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

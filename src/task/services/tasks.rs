//! Service layer mediating between the HTTP boundary and storage.

use crate::task::{
    domain::{PageRequest, Task, TaskDraft, TaskId, TaskPage},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The referenced task id does not exist in storage.
    ///
    /// The message doubles as the 404 response body, so its wording is
    /// part of the HTTP contract.
    #[error("Task not found with id: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Every operation is a thin delegation to the repository port; the
/// only business logic lives in [`TaskService::update_task`].
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns one page of tasks plus total-count metadata.
    ///
    /// An empty page is a valid result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the page load
    /// fails.
    pub async fn list_tasks(&self, request: PageRequest) -> TaskServiceResult<TaskPage> {
        Ok(self.repository.find_page(request).await?)
    }

    /// Persists a new task; storage assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        Ok(self.repository.insert(&draft).await?)
    }

    /// Removes the task with the given identifier.
    ///
    /// Deleting an absent id is a no-op; the operation is idempotent
    /// and performs no existence check.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the delete fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete_by_id(id).await?)
    }

    /// Returns every task whose name or description contains `query`.
    ///
    /// Matching semantics are inherited from the storage collaborator;
    /// an empty query matches every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the search fails.
    pub async fn search_tasks(&self, query: &str) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.search_name_or_description(query).await?)
    }

    /// Overwrites an existing task's name, description, and completion
    /// flag with the draft values, preserving the identifier.
    ///
    /// The load and the write are separate storage round trips with no
    /// transaction around them; concurrent updates to the same id may
    /// lose one writer's fields, and a delete landing between the two
    /// reports the id as missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task with `id`
    /// exists at either round trip, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update_task(&self, id: TaskId, draft: TaskDraft) -> TaskServiceResult<Task> {
        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        existing.apply_draft(draft);
        self.repository
            .update(&existing)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(_) => TaskServiceError::NotFound(id),
                other => TaskServiceError::Repository(other),
            })
    }
}

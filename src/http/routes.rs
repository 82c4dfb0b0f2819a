//! Request handlers for the task API.

use super::error::ApiError;
use crate::task::{
    domain::{PageRequest, Sort, Task, TaskDraft, TaskId, TaskPage},
    ports::TaskRepository,
    services::TaskService,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for create and update operations.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPayload {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl TaskPayload {
    /// Validates the payload into a domain draft.
    fn into_draft(self) -> Result<TaskDraft, ApiError> {
        Ok(TaskDraft::new(self.name, self.description, self.completed)?)
    }
}

/// Query parameters for the paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    page: u32,
    size: Option<u32>,
    sort: Option<String>,
}

impl ListParams {
    fn into_page_request(self) -> Result<PageRequest, ApiError> {
        let Self { page, size, sort } = self;
        let parsed_sort = sort
            .as_deref()
            .map(Sort::try_from)
            .transpose()
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;

        let mut request = PageRequest::new(page, size.unwrap_or(PageRequest::DEFAULT_SIZE));
        if let Some(sort_value) = parsed_sort {
            request = request.with_sort(sort_value);
        }
        Ok(request)
    }
}

/// Query parameters for substring search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Substring matched against name and description; absent means
    /// match everything.
    #[serde(default)]
    query: String,
}

/// `GET /api/tasks` — paginated listing.
pub async fn list_tasks<R>(
    State(service): State<Arc<TaskService<R>>>,
    Query(params): Query<ListParams>,
) -> Result<Json<TaskPage>, ApiError>
where
    R: TaskRepository,
{
    let request = params.into_page_request()?;
    Ok(Json(service.list_tasks(request).await?))
}

/// `POST /api/tasks` — create; responds 201 with the persisted task.
pub async fn create_task<R>(
    State(service): State<Arc<TaskService<R>>>,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository,
{
    let draft = payload.into_draft()?;
    let task = service.create_task(draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/tasks/{id}` — full overwrite of an existing task.
pub async fn update_task<R>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
{
    let draft = payload.into_draft()?;
    Ok(Json(service.update_task(TaskId::new(id), draft).await?))
}

/// `DELETE /api/tasks/{id}` — idempotent delete, responds 200.
pub async fn delete_task<R>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
{
    service.delete_task(TaskId::new(id)).await?;
    Ok(StatusCode::OK)
}

/// `GET /api/tasks/search` — substring match over name and description.
pub async fn search_tasks<R>(
    State(service): State<Arc<TaskService<R>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository,
{
    Ok(Json(service.search_tasks(&params.query).await?))
}

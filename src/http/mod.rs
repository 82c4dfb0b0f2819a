//! HTTP boundary: axum router and request handlers for the task API.
//!
//! Endpoints:
//!
//! - `GET    /api/tasks?page&size&sort`
//! - `POST   /api/tasks`
//! - `PUT    /api/tasks/{id}`
//! - `DELETE /api/tasks/{id}`
//! - `GET    /api/tasks/search?query=`

mod error;
mod routes;

pub use error::ApiError;

use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{
    Router,
    routing::{get, put},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the task API router over the given service.
#[must_use]
pub fn build_router<R>(service: Arc<TaskService<R>>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route(
            "/api/tasks",
            get(routes::list_tasks::<R>).post(routes::create_task::<R>),
        )
        .route("/api/tasks/search", get(routes::search_tasks::<R>))
        .route(
            "/api/tasks/{id}",
            put(routes::update_task::<R>).delete(routes::delete_task::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Binds the listener and serves the router until the process exits.
///
/// # Errors
///
/// Returns an I/O error when binding or serving fails.
pub async fn serve(addr: SocketAddr, router: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("task API listening on http://{addr}");
    axum::serve(listener, router).await
}

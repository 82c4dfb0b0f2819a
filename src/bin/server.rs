//! Taskboard HTTP server entry point.
//!
//! Reads configuration from CLI flags or the environment, builds the
//! `PostgreSQL` connection pool, and serves the task API until the
//! process exits.

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::net::SocketAddr;
use std::sync::Arc;
use taskboard::http;
use taskboard::task::{adapters::postgres::PostgresTaskRepository, services::TaskService};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration.
#[derive(Debug, Parser)]
#[command(name = "taskboard", about = "Task management HTTP service")]
struct Args {
    /// Socket address to bind the HTTP listener on.
    #[arg(long, env = "TASKBOARD_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

/// Errors raised during server startup.
#[derive(Debug, Error)]
enum ServerError {
    #[error("failed to build connection pool: {0}")]
    PoolInit(#[source] diesel::r2d2::PoolError),
    #[error("failed to serve the task API: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing();
    let args = Args::parse();

    let manager = ConnectionManager::<PgConnection>::new(args.database_url);
    let pool = Pool::builder()
        .build(manager)
        .map_err(ServerError::PoolInit)?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = Arc::new(TaskService::new(repository));
    let router = http::build_router(service);

    info!("starting taskboard on {}", args.bind);
    http::serve(args.bind, router)
        .await
        .map_err(ServerError::Serve)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! Taskboard: a minimal task-management HTTP service.
//!
//! This crate provides create, read, update, delete, search, and
//! paginated listing of task records backed by a relational store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, the persistence port and its adapters, and
//!   the orchestration service
//! - [`http`]: axum boundary translating HTTP requests to service calls

pub mod http;
pub mod task;

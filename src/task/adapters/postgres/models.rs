//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Required task name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
}

/// Insert model for task records; the id column is database-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Required task name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
}

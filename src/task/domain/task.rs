//! Task record and caller-supplied draft data.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a persisted task record.
///
/// Identifiers are assigned by the storage collaborator on insert and
/// are immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wraps a storage-assigned identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped integer value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied task fields for create and update operations.
///
/// Drafts carry everything a caller may set; the identifier is never
/// part of a draft because storage owns its assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    name: String,
    description: Option<String>,
    completed: bool,
}

impl TaskDraft {
    /// Creates a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] when the name is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        completed: bool,
    ) -> Result<Self, TaskDomainError> {
        let raw = name.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyName);
        }
        Ok(Self {
            name: raw,
            description,
            completed,
        })
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }
}

/// Persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    description: Option<String>,
    completed: bool,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: TaskId,
        name: String,
        description: Option<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Overwrites the caller-editable fields with the draft values.
    ///
    /// The identifier is preserved. All three fields are replaced
    /// unconditionally; there is no field-presence merge.
    pub fn apply_draft(&mut self, draft: TaskDraft) {
        let TaskDraft {
            name,
            description,
            completed,
        } = draft;
        self.name = name;
        self.description = description;
        self.completed = completed;
    }
}

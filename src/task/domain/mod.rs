//! Domain model for task records.
//!
//! The task domain models persisted task records, caller-supplied
//! drafts, and the paging and sorting vocabulary of task listings while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod page;
mod task;

pub use error::{ParseSortError, TaskDomainError};
pub use page::{PageRequest, Sort, SortDirection, SortField, TaskPage};
pub use task::{Task, TaskDraft, TaskId};

//! In-memory repository for task CRUD tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{PageRequest, Sort, SortDirection, SortField, Task, TaskDraft, TaskId, TaskPage},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially starting at 1, mirroring a
/// relational auto-increment column. The backing map is keyed by id, so
/// unsorted iteration already yields the id-ascending storage default.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Orders tasks in place according to the requested sort.
///
/// The sort is stable over the id-ascending input, so rows that compare
/// equal on the requested field stay in id order in either direction.
fn sort_tasks(tasks: &mut [Task], sort: Sort) {
    let by_field = |left: &Task, right: &Task| match sort.field {
        SortField::Id => left.id().cmp(&right.id()),
        SortField::Name => left.name().cmp(right.name()),
        SortField::Completed => left.completed().cmp(&right.completed()),
    };
    match sort.direction {
        SortDirection::Ascending => tasks.sort_by(by_field),
        SortDirection::Descending => tasks.sort_by(|left, right| by_field(left, right).reverse()),
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.write_state()?;
        let id = TaskId::new(state.next_id);
        state.next_id += 1;
        let task = Task::from_persisted(
            id,
            draft.name().to_owned(),
            draft.description().map(ToOwned::to_owned),
            draft.completed(),
        );
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write_state()?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> TaskRepositoryResult<TaskPage> {
        let state = self.read_state()?;
        let total = u64::try_from(state.tasks.len()).unwrap_or(u64::MAX);

        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        if let Some(sort) = request.sort() {
            sort_tasks(&mut tasks, sort);
        }

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let content: Vec<Task> = tasks.into_iter().skip(offset).take(limit).collect();

        Ok(TaskPage::new(content, total, request))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        state.tasks.remove(&id);
        Ok(())
    }

    async fn search_name_or_description(&self, query: &str) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        let matches = state
            .tasks
            .values()
            .filter(|task| {
                task.name().contains(query)
                    || task
                        .description()
                        .is_some_and(|description| description.contains(query))
            })
            .cloned()
            .collect();
        Ok(matches)
    }
}

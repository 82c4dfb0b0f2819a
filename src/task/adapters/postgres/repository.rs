//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PageRequest, Sort, SortDirection, SortField, Task, TaskDraft, TaskId, TaskPage},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            name: draft.name().to_owned(),
            description: draft.description().map(ToOwned::to_owned),
            completed: draft.completed(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let id = task.id();
        let changes = (
            tasks::name.eq(task.name().to_owned()),
            tasks::description.eq(task.description().map(ToOwned::to_owned)),
            tasks::completed.eq(task.completed()),
        );

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.into_inner()))
                .set(changes)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn find_page(&self, request: PageRequest) -> TaskRepositoryResult<TaskPage> {
        self.run_blocking(move |connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let rows = sorted_tasks_query(request.sort())
                .limit(i64::from(request.size()))
                .offset(i64::try_from(request.offset()).unwrap_or(i64::MAX))
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let content = rows.into_iter().map(row_to_task).collect();
            Ok(TaskPage::new(
                content,
                u64::try_from(total).unwrap_or(0),
                request,
            ))
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Affected-row count is intentionally ignored: deleting an
            // absent id is a no-op.
            diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn search_name_or_description(&self, query: &str) -> TaskRepositoryResult<Vec<Task>> {
        let pattern = format!("%{query}%");

        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(
                    tasks::name
                        .like(pattern.clone())
                        .or(tasks::description.assume_not_null().like(pattern)),
                )
                .order(tasks::id.asc())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }
}

/// Builds the paging query with the requested ordering applied.
///
/// The id-ascending fallback keeps unsorted pagination deterministic,
/// and rows that tie on the requested column fall back to id ascending
/// so repeated loads page identically.
fn sorted_tasks_query(sort: Option<Sort>) -> tasks::BoxedQuery<'static, diesel::pg::Pg> {
    let query = tasks::table.into_boxed();
    let Some(Sort { field, direction }) = sort else {
        return query.order(tasks::id.asc());
    };
    let ordered = match (field, direction) {
        (SortField::Id, SortDirection::Ascending) => return query.order(tasks::id.asc()),
        (SortField::Id, SortDirection::Descending) => return query.order(tasks::id.desc()),
        (SortField::Name, SortDirection::Ascending) => query.order(tasks::name.asc()),
        (SortField::Name, SortDirection::Descending) => query.order(tasks::name.desc()),
        (SortField::Completed, SortDirection::Ascending) => query.order(tasks::completed.asc()),
        (SortField::Completed, SortDirection::Descending) => query.order(tasks::completed.desc()),
    };
    ordered.then_order_by(tasks::id.asc())
}

fn row_to_task(row: TaskRow) -> Task {
    Task::from_persisted(TaskId::new(row.id), row.name, row.description, row.completed)
}

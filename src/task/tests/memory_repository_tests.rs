//! Repository contract tests for the in-memory adapter.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PageRequest, Sort, SortDirection, SortField, Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn draft(name: &str, description: Option<&str>) -> TaskDraft {
    TaskDraft::new(name, description.map(ToOwned::to_owned), false).expect("valid draft")
}

async fn seed(repository: &InMemoryTaskRepository, names: &[&str]) {
    for name in names {
        repository.insert(&draft(name, None)).await.expect("insert");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_ids_and_find_by_id_round_trips(repository: InMemoryTaskRepository) {
    let inserted = repository
        .insert(&draft("First", Some("one")))
        .await
        .expect("insert");

    assert_eq!(inserted.id(), TaskId::new(1));
    let fetched = repository
        .find_by_id(inserted.id())
        .await
        .expect("lookup");
    assert_eq!(fetched, Some(inserted));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_when_missing(repository: InMemoryTaskRepository) {
    let fetched = repository.find_by_id(TaskId::new(808)).await.expect("lookup");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_returns_not_found(repository: InMemoryTaskRepository) {
    let phantom = Task::from_persisted(TaskId::new(5), "Ghost".to_owned(), None, false);

    let result = repository.update(&phantom).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(5)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_page_defaults_to_id_ascending(repository: InMemoryTaskRepository) {
    seed(&repository, &["Charlie", "Alpha", "Bravo"]).await;

    let page = repository
        .find_page(PageRequest::new(0, 10))
        .await
        .expect("page");

    let ids: Vec<TaskId> = page.content.iter().map(Task::id).collect();
    assert_eq!(ids, vec![TaskId::new(1), TaskId::new(2), TaskId::new(3)]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_page_sorts_by_name_descending(repository: InMemoryTaskRepository) {
    seed(&repository, &["Charlie", "Alpha", "Bravo"]).await;

    let request = PageRequest::new(0, 10).with_sort(Sort {
        field: SortField::Name,
        direction: SortDirection::Descending,
    });
    let page = repository.find_page(request).await.expect("page");

    let names: Vec<&str> = page.content.iter().map(|task| task.name()).collect();
    assert_eq!(names, vec!["Charlie", "Bravo", "Alpha"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn descending_sort_keeps_ties_in_id_order(repository: InMemoryTaskRepository) {
    for (name, completed) in [
        ("One", false),
        ("Two", true),
        ("Three", false),
        ("Four", true),
    ] {
        let seeded = TaskDraft::new(name, None, completed).expect("valid draft");
        repository.insert(&seeded).await.expect("insert");
    }

    let request = PageRequest::new(0, 10).with_sort(Sort {
        field: SortField::Completed,
        direction: SortDirection::Descending,
    });
    let page = repository.find_page(request).await.expect("page");

    let ids: Vec<TaskId> = page.content.iter().map(Task::id).collect();
    assert_eq!(
        ids,
        vec![TaskId::new(2), TaskId::new(4), TaskId::new(1), TaskId::new(3)]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_page_beyond_total_is_empty_but_counts(repository: InMemoryTaskRepository) {
    seed(&repository, &["Only"]).await;

    let page = repository
        .find_page(PageRequest::new(9, 10))
        .await
        .expect("page");

    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.total_pages, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_row_and_tolerates_absent_ids(repository: InMemoryTaskRepository) {
    let inserted = repository.insert(&draft("Doomed", None)).await.expect("insert");

    repository.delete_by_id(inserted.id()).await.expect("delete");
    repository
        .delete_by_id(inserted.id())
        .await
        .expect("repeat delete is a no-op");

    let fetched = repository.find_by_id(inserted.id()).await.expect("lookup");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_is_case_sensitive_substring_match(repository: InMemoryTaskRepository) {
    repository
        .insert(&draft("Deploy service", Some("production rollout")))
        .await
        .expect("insert first");
    repository
        .insert(&draft("deploy docs", None))
        .await
        .expect("insert second");

    let matches = repository
        .search_name_or_description("Deploy")
        .await
        .expect("search");

    let names: Vec<&str> = matches.iter().map(|task| task.name()).collect();
    assert_eq!(names, vec!["Deploy service"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_description_column(repository: InMemoryTaskRepository) {
    repository
        .insert(&draft("Opaque name", Some("needle inside")))
        .await
        .expect("insert");

    let matches = repository
        .search_name_or_description("needle")
        .await
        .expect("search");

    assert_eq!(matches.len(), 1);
}

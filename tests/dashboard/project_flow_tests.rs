//! Project lifecycle flows through the dashboard client.

use backoffice::api::{ApiErrorKind, DashboardClient};
use backoffice::project::domain::{MoveDirection, ProjectId, RunParameters};
use backoffice::task::domain::TaskId;
use rstest::rstest;

use super::helpers::{client, project_ids};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_project_can_be_run_moved_and_deleted(client: DashboardClient) {
    let created = client
        .create_project(TaskId::new(2))
        .await
        .expect("create should succeed");
    assert_eq!(created.order().value(), 4);

    let run = client
        .run_projects(vec![created.id()], RunParameters::default())
        .await
        .expect("run should succeed");
    assert_eq!(run.len(), 1);

    client
        .reorder_project(created.id(), MoveDirection::Up)
        .await
        .expect("reorder should succeed");
    let listed = client.projects().await.expect("listing should succeed");
    assert_eq!(project_ids(&listed), vec![1, 2, 4, 3]);
    let scored = listed
        .iter()
        .find(|view| view.project().id() == created.id())
        .expect("created project should be listed");
    assert!(scored.project().result().is_some());

    client
        .delete_project(created.id())
        .await
        .expect("delete should succeed");
    let remaining = client.projects().await.expect("listing should succeed");
    assert_eq!(project_ids(&remaining), vec![1, 2, 3]);

    let err = client
        .reorder_project(created.id(), MoveDirection::Down)
        .await
        .expect_err("deleted project cannot move");
    assert_eq!(err.kind(), ApiErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moves_keep_a_permutation_of_the_seed(client: DashboardClient) {
    let moves = [
        (3, MoveDirection::Up),
        (3, MoveDirection::Up),
        (3, MoveDirection::Up),
        (1, MoveDirection::Down),
        (2, MoveDirection::Down),
    ];
    for (id, direction) in moves {
        client
            .reorder_project(ProjectId::new(id), direction)
            .await
            .expect("reorder should succeed");
    }

    let listed = client.projects().await.expect("listing should succeed");
    let mut orders: Vec<u64> = listed
        .iter()
        .map(|view| view.project().order().value())
        .collect();
    orders.sort_unstable();

    assert_eq!(project_ids(&listed), vec![3, 1, 2]);
    assert_eq!(orders, vec![1, 2, 3]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_readers_share_one_listing(client: DashboardClient) {
    let readers: Vec<_> = (0..6)
        .map(|_| {
            let reader = client.clone();
            tokio::spawn(async move { reader.projects().await })
        })
        .collect();

    for reader in readers {
        let listed = reader
            .await
            .expect("reader should not panic")
            .expect("listing should succeed");
        assert_eq!(project_ids(&listed), vec![1, 2, 3]);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_leaves_project_unlinked(client: DashboardClient) {
    client
        .delete_task(TaskId::new(3))
        .await
        .expect("task delete should succeed");
    client
        .reorder_project(ProjectId::new(3), MoveDirection::Up)
        .await
        .expect("reorder should succeed");

    let listed = client.projects().await.expect("listing should succeed");
    let orphan = listed
        .iter()
        .find(|view| view.project().id() == ProjectId::new(3))
        .expect("project should outlive its task");

    assert!(orphan.task().is_none());
    assert_eq!(orphan.project().task_id(), TaskId::new(3));
}

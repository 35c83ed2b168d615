//! Tests for fetching, de-duplication and invalidation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::cache::{EntityKind, Mutation, Query, QueryCache, QueryTag};
use crate::task::domain::TaskId;
use rstest::{fixture, rstest};
use tokio::sync::oneshot;

type TestCache = QueryCache<Query, String>;

#[fixture]
fn cache() -> TestCache {
    QueryCache::new(100)
}

async fn counted_fetch(
    cache: &TestCache,
    query: Query,
    calls: &Arc<AtomicUsize>,
) -> Result<String, Arc<String>> {
    let counter = Arc::clone(calls);
    cache
        .fetch(query, async move {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<_, String>(format!("{query:?}"))
        })
        .await
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_fetches_share_one_request(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = cache.clone();
            let counter = Arc::clone(&calls);
            tokio::spawn(async move { counted_fetch(&shared, Query::Tasks, &counter).await })
        })
        .collect();
    for handle in handles {
        let value = handle.await.expect("task should join").expect("fetch should succeed");
        assert_eq!(value, "Tasks");
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cached_value_is_reused_until_invalidated(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));

    counted_fetch(&cache, Query::Projects, &calls).await.expect("first fetch");
    counted_fetch(&cache, Query::Projects, &calls).await.expect("second fetch");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let evicted = cache.invalidate(&Mutation::ReorderProject.invalidates()).await;
    assert_eq!(evicted, vec![Query::Projects]);
    assert_eq!(cache.peek(&Query::Projects).await, None);

    counted_fetch(&cache, Query::Projects, &calls).await.expect("third fetch");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failures_are_shared_and_not_cached(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));
    let failing = |counter: Arc<AtomicUsize>| async move {
        counter.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Err::<String, _>("backend down".to_owned())
    };

    let (first, second) = tokio::join!(
        cache.fetch(Query::Users, failing(Arc::clone(&calls))),
        cache.fetch(Query::Users, failing(Arc::clone(&calls))),
    );
    let first_error = first.expect_err("fetch should fail");
    let second_error = second.expect_err("fetch should fail");
    assert!(Arc::ptr_eq(&first_error, &second_error));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let recovered = counted_fetch(&cache, Query::Users, &calls)
        .await
        .expect("retry should fetch again");
    assert_eq!(recovered, "Users");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_mutation_keeps_entity_entries(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));
    let task = Query::Task(TaskId::new(1));
    counted_fetch(&cache, Query::Tasks, &calls).await.expect("list fetch");
    counted_fetch(&cache, task, &calls).await.expect("entity fetch");

    cache.invalidate(&Mutation::CreateTask.invalidates()).await;

    assert_eq!(cache.peek(&Query::Tasks).await, None);
    assert!(cache.peek(&task).await.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn entity_mutation_evicts_list_and_entity(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));
    let edited = Query::Task(TaskId::new(1));
    let other = Query::Task(TaskId::new(2));
    for query in [Query::Tasks, edited, other] {
        counted_fetch(&cache, query, &calls).await.expect("fetch");
    }

    cache
        .invalidate(&Mutation::EditTask(TaskId::new(1)).invalidates())
        .await;

    assert_eq!(cache.peek(&Query::Tasks).await, None);
    assert_eq!(cache.peek(&edited).await, None);
    assert!(cache.peek(&other).await.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_check_invalidates_nothing(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));
    counted_fetch(&cache, Query::Users, &calls).await.expect("fetch");

    let evicted = cache.invalidate(&Mutation::CheckUserEmail.invalidates()).await;

    assert!(evicted.is_empty());
    assert!(cache.peek(&Query::Users).await.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscribers_are_notified_on_invalidation(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));
    counted_fetch(&cache, Query::Projects, &calls).await.expect("fetch");
    let projects = cache.subscribe(&Query::Projects);
    let users = cache.subscribe(&Query::Users);

    cache
        .invalidate(&[QueryTag::list(EntityKind::Project)])
        .await;

    assert!(projects.has_changed().expect("sender should be alive"));
    assert!(!users.has_changed().expect("sender should be alive"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reset_discards_everything_and_notifies(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));
    for query in [Query::Projects, Query::CheckAuthenticated] {
        counted_fetch(&cache, query, &calls).await.expect("fetch");
    }
    let auth = cache.subscribe(&Query::CheckAuthenticated);

    cache.reset();

    assert_eq!(cache.peek(&Query::Projects).await, None);
    assert_eq!(cache.peek(&Query::CheckAuthenticated).await, None);
    assert!(auth.has_changed().expect("sender should be alive"));

    counted_fetch(&cache, Query::Projects, &calls).await.expect("refetch");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn result_invalidated_in_flight_is_not_kept(cache: TestCache) {
    let (started_tx, started_rx) = oneshot::channel::<()>();
    let (release_tx, release_rx) = oneshot::channel::<()>();
    let shared = cache.clone();
    let pending = tokio::spawn(async move {
        shared
            .fetch(Query::Projects, async move {
                started_tx.send(()).map_err(|()| "observer gone".to_owned())?;
                release_rx.await.map_err(|err| err.to_string())?;
                Ok::<_, String>("stale".to_owned())
            })
            .await
    });

    started_rx.await.expect("fetch should start");
    cache
        .invalidate(&Mutation::CreateProject.invalidates())
        .await;
    release_tx.send(()).expect("fetch should be waiting");
    let value = pending
        .await
        .expect("task should join")
        .expect("fetch should succeed");

    assert_eq!(value, "stale");
    assert_eq!(cache.peek(&Query::Projects).await, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_one_caller_does_not_cancel_the_others(cache: TestCache) {
    let calls = Arc::new(AtomicUsize::new(0));
    let first = {
        let shared = cache.clone();
        let counter = Arc::clone(&calls);
        tokio::spawn(async move { counted_fetch(&shared, Query::Users, &counter).await })
    };
    let second = {
        let shared = cache.clone();
        let counter = Arc::clone(&calls);
        tokio::spawn(async move { counted_fetch(&shared, Query::Users, &counter).await })
    };

    tokio::time::sleep(Duration::from_millis(5)).await;
    first.abort();
    let value = second
        .await
        .expect("task should join")
        .expect("fetch should succeed");

    assert_eq!(value, "Users");
    assert_eq!(cache.peek(&Query::Users).await.as_deref(), Some("Users"));
}

//! Backends built from configuration files.

use std::sync::Arc;

use backoffice::api::{Backoffice, DashboardClient};
use backoffice::config::BackofficeConfig;
use backoffice::project::domain::{Project, ProjectId, RunParameters};
use backoffice::task::{domain::TaskKind, services::CreateTaskRequest};
use camino::Utf8PathBuf;

fn write_config(dir: &tempfile::TempDir, text: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("backoffice.toml"))
        .expect("temp path should be UTF-8");
    std::fs::write(&path, text).expect("config should be written");
    path
}

#[tokio::test(flavor = "multi_thread")]
async fn unseeded_store_starts_empty_and_accepts_writes() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = write_config(&dir, "[store]\nseed = false\n\n[scoring]\nrng_seed = 7\n");
    let config = BackofficeConfig::load(&path).expect("config should load");
    let backend = Backoffice::from_config(&config).expect("backend should build");
    let client = DashboardClient::new(Arc::new(backend), config.cache.max_capacity);

    assert!(client.projects().await.expect("listing should succeed").is_empty());
    let task = client
        .create_task(CreateTaskRequest::new("Nightly export", TaskKind::Run))
        .await
        .expect("task create should succeed");
    let project = client
        .create_project(task.id())
        .await
        .expect("project create should succeed");

    assert_eq!(task.id().value(), 1);
    assert_eq!(project.order().value(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn seeded_scorers_repeat_their_runs() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = write_config(&dir, "[scoring]\nupper_bound = 10.0\nrng_seed = 42\n");
    let config = BackofficeConfig::load(&path).expect("config should load");

    let mut results = Vec::new();
    for _ in 0..2 {
        let client = DashboardClient::new(
            Arc::new(Backoffice::from_config(&config).expect("backend should build")),
            config.cache.max_capacity,
        );
        let ran = client
            .run_projects(vec![ProjectId::new(1)], RunParameters::default())
            .await
            .expect("run should succeed");
        let score = ran
            .first()
            .and_then(Project::result)
            .expect("run should score the project");
        results.push(score.to_bits());
    }

    assert_eq!(results.first(), results.last());
}

//! Shared fixtures for dashboard integration tests.

use std::sync::Arc;

use backoffice::api::{Backoffice, DashboardClient};
use backoffice::config::BackofficeConfig;
use backoffice::project::domain::ProjectView;
use rstest::fixture;

/// Provides a backend over the seed data.
#[fixture]
pub fn backend() -> Arc<Backoffice> {
    let backend =
        Backoffice::from_config(&BackofficeConfig::default()).expect("fixtures should load");
    Arc::new(backend)
}

/// Provides a signed-out client over a fresh seeded backend.
#[fixture]
pub fn client(backend: Arc<Backoffice>) -> DashboardClient {
    DashboardClient::new(backend, 100)
}

/// Returns the project ids in display order.
pub fn project_ids(views: &[ProjectView]) -> Vec<u64> {
    views
        .iter()
        .map(|view| view.project().id().value())
        .collect()
}

//! Shared world state for project ordering BDD scenarios.

use backoffice::api::{ApiError, Backoffice};
use backoffice::project::domain::ProjectView;
use rstest::fixture;

/// Scenario world for project ordering behaviour tests.
#[derive(Default)]
pub struct ProjectWorld {
    /// The backend under test, installed by a `Given` step.
    pub backoffice: Option<Backoffice>,
    /// Error of the last rejected request.
    pub last_error: Option<ApiError>,
}

impl ProjectWorld {
    /// Returns the installed backend.
    pub fn backoffice(&self) -> Result<&Backoffice, eyre::Report> {
        self.backoffice
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no backoffice installed"))
    }

    /// Lists the projects in display order.
    pub fn projects(&self) -> Result<Vec<ProjectView>, eyre::Report> {
        run_async(self.backoffice()?.list_projects())
            .map(|reply| reply.body)
            .map_err(|err| eyre::eyre!("listing projects failed: {err}"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectWorld {
    ProjectWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

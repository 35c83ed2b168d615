//! Repository port for ordered project persistence.

use crate::project::domain::{MoveDirection, Project, ProjectId, ProjectScore, ReorderOutcome};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Every write reads and changes the live set in one atomic step, so
/// concurrent creates, reorders, runs and deletes never overwrite each
/// other with stale snapshots.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every live project in id order.
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Creates a project for `task_id` with the next free id and an order
    /// one past the largest live order.
    async fn insert_next(&self, task_id: TaskId) -> ProjectRepositoryResult<Project>;

    /// Moves a project one step by swapping order values with its
    /// neighbour, as planned by [`plan_reorder`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project is not
    /// live.
    ///
    /// [`plan_reorder`]: crate::project::domain::plan_reorder
    async fn reorder(
        &self,
        id: ProjectId,
        direction: MoveDirection,
    ) -> ProjectRepositoryResult<ReorderOutcome>;

    /// Sets the result of every scored project that is still live, leaving
    /// its order untouched. Scores for deleted projects are dropped.
    ///
    /// Returns the updated projects.
    async fn record_scores(&self, scores: &[ProjectScore]) -> ProjectRepositoryResult<Vec<Project>>;

    /// Removes a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

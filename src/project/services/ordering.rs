//! Service layer for the ordered project list.

use crate::project::{
    domain::{
        MoveDirection, Project, ProjectDomainError, ProjectId, ProjectScore, ProjectView,
        ReorderOutcome, RunParameters, sorted_by_order,
    },
    ports::{ProjectRepository, ProjectRepositoryError, ProjectScorer},
};
use crate::task::{
    domain::TaskId,
    ports::{TaskRepository, TaskRepositoryError},
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// Task lookup for the list projection failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project ordering service.
///
/// Owns the ordering invariant: after every operation the `order` values of
/// live projects are pairwise distinct.
#[derive(Clone)]
pub struct ProjectOrderingService<P, T, S>
where
    P: ProjectRepository,
    T: TaskRepository,
    S: ProjectScorer,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    scorer: Arc<S>,
}

impl<P, T, S> ProjectOrderingService<P, T, S>
where
    P: ProjectRepository,
    T: TaskRepository,
    S: ProjectScorer,
{
    /// Creates a new project ordering service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, scorer: Arc<S>) -> Self {
        Self {
            projects,
            tasks,
            scorer,
        }
    }

    /// Returns every project joined with its task, sorted by ascending
    /// order. Projects whose task was deleted carry no task.
    ///
    /// # Errors
    ///
    /// Returns repository errors when either store fails.
    pub async fn list_ordered(&self) -> ProjectServiceResult<Vec<ProjectView>> {
        let projects = sorted_by_order(&self.projects.list_all().await?);
        let tasks: HashMap<TaskId, _> = self
            .tasks
            .list_all()
            .await?
            .into_iter()
            .map(|task| (task.id(), task))
            .collect();
        let views: Vec<ProjectView> = projects
            .into_iter()
            .map(|project| {
                let task = tasks.get(&project.task_id()).cloned();
                ProjectView::new(project, task)
            })
            .collect();
        debug!(count = views.len(), "listed projects");
        Ok(views)
    }

    /// Returns a single project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] (wrapped) when the
    /// project does not exist.
    pub async fn get(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProjectRepositoryError::NotFound(id).into())
    }

    /// Creates a project at the end of the list. The task reference is not
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns repository errors when persistence fails.
    pub async fn create(&self, task_id: TaskId) -> ProjectServiceResult<Project> {
        let project = self.projects.insert_next(task_id).await?;
        info!(
            project_id = %project.id(),
            task_id = %task_id,
            order = %project.order(),
            "project created"
        );
        Ok(project)
    }

    /// Deletes a project. Remaining projects keep their order values.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] (wrapped) when the
    /// project does not exist.
    pub async fn delete(&self, id: ProjectId) -> ProjectServiceResult<()> {
        self.projects.delete(id).await?;
        info!(project_id = %id, "project deleted");
        Ok(())
    }

    /// Moves a project one step up or down by swapping order values with its
    /// neighbour. Boundary moves succeed without changes.
    ///
    /// Returns the projects whose order changed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] (wrapped) when the
    /// project is not live.
    pub async fn reorder(
        &self,
        id: ProjectId,
        direction: MoveDirection,
    ) -> ProjectServiceResult<Vec<Project>> {
        let outcome = self
            .projects
            .reorder(id, direction)
            .await
            .inspect_err(|err| {
                if matches!(err, ProjectRepositoryError::NotFound(_)) {
                    warn!(project_id = %id, %direction, "reorder of unknown project");
                }
            })?;
        let changed = outcome.changed();
        match outcome {
            ReorderOutcome::Unchanged => {
                debug!(project_id = %id, %direction, "reorder at boundary ignored");
            }
            ReorderOutcome::Swapped { moved, displaced } => {
                info!(
                    project_id = %moved.id(),
                    neighbour_id = %displaced.id(),
                    %direction,
                    "project reordered"
                );
            }
        }
        Ok(changed)
    }

    /// Scores every live project whose id appears in `ids`.
    ///
    /// Unknown ids are skipped and duplicates are scored once. Nothing is
    /// written when any score falls outside the scorer's range. Only the
    /// `result` field is written, so a concurrent reorder keeps its swap and
    /// a project deleted mid-run stays deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] for an out-of-range score, or
    /// repository errors when persistence fails.
    pub async fn run(
        &self,
        ids: &[ProjectId],
        parameters: &RunParameters,
    ) -> ProjectServiceResult<Vec<Project>> {
        let requested: BTreeSet<ProjectId> = ids.iter().copied().collect();
        let upper_bound = self.scorer.upper_bound();
        let scores = self
            .projects
            .list_all()
            .await?
            .iter()
            .filter(|project| requested.contains(&project.id()))
            .map(|project| {
                let score = self.scorer.score(project, parameters);
                ProjectScore::new(project.id(), score, upper_bound)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let updated = if scores.is_empty() {
            Vec::new()
        } else {
            self.projects.record_scores(&scores).await?
        };
        let skipped = requested.len().saturating_sub(updated.len());
        info!(scored = updated.len(), skipped, "projects run");
        Ok(updated)
    }
}

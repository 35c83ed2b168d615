//! In-memory project repository used by the mock backend and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::mock::SimulatedLatency;
use crate::project::{
    domain::{
        MoveDirection, Project, ProjectId, ProjectScore, ReorderOutcome, next_order, plan_reorder,
    },
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::task::domain::TaskId;

type ProjectMap = BTreeMap<ProjectId, Project>;

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<ProjectMap>>,
    latency: SimulatedLatency,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given projects.
    #[must_use]
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let state = projects
            .into_iter()
            .map(|project| (project.id(), project))
            .collect();
        Self {
            state: Arc::new(RwLock::new(state)),
            latency: SimulatedLatency::none(),
        }
    }

    /// Delays every call by the given latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    fn read(&self) -> ProjectRepositoryResult<RwLockReadGuard<'_, ProjectMap>> {
        self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProjectRepositoryResult<RwLockWriteGuard<'_, ProjectMap>> {
        self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.latency.wait().await;
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.latency.wait().await;
        Ok(self.read()?.get(&id).cloned())
    }

    async fn insert_next(&self, task_id: TaskId) -> ProjectRepositoryResult<Project> {
        self.latency.wait().await;
        let mut state = self.write()?;
        let max_id = state.keys().next_back().map_or(0, |id| id.value());
        let live: Vec<Project> = state.values().cloned().collect();
        let id = ProjectId::new(max_id.saturating_add(1));
        let project = Project::new(id, task_id, next_order(&live));
        state.insert(project.id(), project.clone());
        Ok(project)
    }

    async fn reorder(
        &self,
        id: ProjectId,
        direction: MoveDirection,
    ) -> ProjectRepositoryResult<ReorderOutcome> {
        self.latency.wait().await;
        let mut state = self.write()?;
        let live: Vec<Project> = state.values().cloned().collect();
        let outcome =
            plan_reorder(&live, id, direction).ok_or(ProjectRepositoryError::NotFound(id))?;
        for project in outcome.changed() {
            state.insert(project.id(), project);
        }
        Ok(outcome)
    }

    async fn record_scores(&self, scores: &[ProjectScore]) -> ProjectRepositoryResult<Vec<Project>> {
        self.latency.wait().await;
        let mut state = self.write()?;
        let mut updated = Vec::with_capacity(scores.len());
        for score in scores {
            if let Some(project) = state.get_mut(&score.id()) {
                project.apply_score(*score);
                updated.push(project.clone());
            }
        }
        Ok(updated)
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.latency.wait().await;
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or(ProjectRepositoryError::NotFound(id))
    }
}

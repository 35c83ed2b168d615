//! In-memory task repository used by the mock backend and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::mock::SimulatedLatency;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<BTreeMap<TaskId, Task>>>,
    latency: SimulatedLatency,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let state = tasks.into_iter().map(|task| (task.id(), task)).collect();
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

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, BTreeMap<TaskId, Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, BTreeMap<TaskId, Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.latency.wait().await;
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.latency.wait().await;
        Ok(self.read()?.get(&id).cloned())
    }

    async fn upsert(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.latency.wait().await;
        self.write()?.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.latency.wait().await;
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn next_id(&self) -> TaskRepositoryResult<TaskId> {
        self.latency.wait().await;
        let tasks = self.read()?;
        let max = tasks.keys().next_back().map_or(0, |id| id.value());
        Ok(TaskId::new(max.saturating_add(1)))
    }
}

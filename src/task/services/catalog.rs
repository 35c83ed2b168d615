//! Service layer for task creation, editing and retrieval.

use crate::task::{
    domain::{Task, TaskDefinition, TaskDomainError, TaskId, TaskKind, TaskName, TaskParameter},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
///
/// New tasks start without parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operation kind.
    #[serde(rename = "type")]
    pub kind: TaskKind,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Raw key/value pair as submitted by the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInput {
    /// Parameter key.
    pub key: String,
    /// Parameter value.
    pub value: String,
}

/// Request payload for editing a task; replaces every editable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTaskRequest {
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operation kind.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Run parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterInput>,
}

impl EditTaskRequest {
    /// Creates an edit request without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            parameters: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(ParameterInput {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskCatalogService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskCatalogService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Returns a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.find_or_error(id).await
    }

    /// Creates a task with the next free identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the name is blank, or
    /// repository errors when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let definition = TaskDefinition {
            name: TaskName::new(request.name)?,
            description: request.description,
            kind: request.kind,
            parameters: Vec::new(),
        };
        let id = self.repository.next_id().await?;
        let task = Task::new(id, definition, &*self.clock);
        self.repository.upsert(&task).await?;
        info!(task_id = %task.id(), kind = %task.kind(), "task created");
        Ok(task)
    }

    /// Replaces the editable fields of a task and restamps its update date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or [`TaskServiceError::Domain`] for invalid fields.
    pub async fn edit(&self, id: TaskId, request: EditTaskRequest) -> TaskServiceResult<Task> {
        let mut task = self.find_or_error(id).await?;
        let parameters = request
            .parameters
            .into_iter()
            .map(|input| TaskParameter::new(input.key, input.value))
            .collect::<Result<Vec<_>, _>>()?;
        let definition = TaskDefinition {
            name: TaskName::new(request.name)?,
            description: request.description,
            kind: request.kind,
            parameters,
        };
        task.apply(definition, &*self.clock);
        self.repository.upsert(&task).await?;
        info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Deletes a task. Projects referencing it keep their link, which then
    /// resolves to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn find_or_error(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}

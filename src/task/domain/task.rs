//! Task aggregate root and its parameters.

use super::{TaskDomainError, TaskId, TaskKind, TaskName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Key/value pair passed to a task when it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskParameter {
    key: String,
    value: String,
}

impl TaskParameter {
    /// Creates a parameter with a trimmed, non-empty key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyParameterKey`] for a blank key.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw_key = key.into();
        let normalized = raw_key.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyParameterKey);
        }
        Ok(Self {
            key: normalized.to_owned(),
            value: value.into(),
        })
    }

    /// Returns the parameter key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the parameter value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Validated task fields supplied on create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinition {
    /// Display name.
    pub name: TaskName,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Operation kind.
    pub kind: TaskKind,
    /// Run parameters.
    pub parameters: Vec<TaskParameter>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: TaskName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    update_date: DateTime<Utc>,
    #[serde(rename = "type")]
    kind: TaskKind,
    #[serde(default)]
    parameters: Vec<TaskParameter>,
}

impl Task {
    /// Creates a task stamped with the current clock time.
    #[must_use]
    pub fn new(id: TaskId, definition: TaskDefinition, clock: &impl Clock) -> Self {
        let TaskDefinition {
            name,
            description,
            kind,
            parameters,
        } = definition;
        Self {
            id,
            name,
            description,
            update_date: clock.utc(),
            kind,
            parameters,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn update_date(&self) -> DateTime<Utc> {
        self.update_date
    }

    /// Returns the operation kind.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the run parameters.
    #[must_use]
    pub fn parameters(&self) -> &[TaskParameter] {
        &self.parameters
    }

    /// Replaces every editable field and restamps the modification time.
    pub fn apply(&mut self, definition: TaskDefinition, clock: &impl Clock) {
        *self = Self::new(self.id, definition, clock);
    }
}

//! Project aggregate and its list projection.

use super::{ProjectDomainError, ProjectId, ProjectOrder};
use crate::task::domain::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Ordered project referencing a task.
///
/// The task link is weak: the task may be deleted while the project lives
/// on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    task_id: TaskId,
    order: ProjectOrder,
    result: Option<f64>,
}

impl Project {
    /// Creates a project that has not been run yet.
    #[must_use]
    pub const fn new(id: ProjectId, task_id: TaskId, order: ProjectOrder) -> Self {
        Self {
            id,
            task_id,
            order,
            result: None,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the referenced task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the list position.
    #[must_use]
    pub const fn order(&self) -> ProjectOrder {
        self.order
    }

    /// Returns the latest run score, or `None` before the first run.
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.result
    }

    /// Moves the project to a new list position.
    pub const fn set_order(&mut self, order: ProjectOrder) {
        self.order = order;
    }

    /// Stores a validated score as the latest result.
    pub const fn apply_score(&mut self, score: ProjectScore) {
        self.result = Some(score.score);
    }
}

/// Run score checked against the scorer's range, addressed to one project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectScore {
    id: ProjectId,
    score: f64,
}

impl ProjectScore {
    /// Validates that `score` lies in `[0, upper_bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ScoreOutOfRange`] for a negative,
    /// non-finite or too large score.
    pub fn new(id: ProjectId, score: f64, upper_bound: f64) -> Result<Self, ProjectDomainError> {
        let in_range = score.is_finite() && score >= 0.0 && score < upper_bound;
        if !in_range {
            return Err(ProjectDomainError::ScoreOutOfRange { score, upper_bound });
        }
        Ok(Self { id, score })
    }

    /// Returns the scored project.
    #[must_use]
    pub const fn id(self) -> ProjectId {
        self.id
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(self) -> f64 {
        self.score
    }
}

/// Project joined with its task, as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectView {
    #[serde(flatten)]
    project: Project,
    task: Option<Task>,
}

impl ProjectView {
    /// Joins a project with its task; `None` when the task is gone.
    #[must_use]
    pub const fn new(project: Project, task: Option<Task>) -> Self {
        Self { project, task }
    }

    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the referenced task, if it still exists.
    #[must_use]
    pub const fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }
}

/// Opaque parameters forwarded to the project scorer on a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunParameters {
    /// Baseline value.
    pub baseline: f64,
    /// Cut-off date as submitted by the client.
    pub cut_off_date: String,
    /// Rate limit.
    pub rate_limit: f64,
}

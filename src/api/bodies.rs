//! Request and response bodies that have no domain counterpart.

use serde::{Deserialize, Serialize};

use crate::project::domain::{MoveDirection, ProjectId, RunParameters};
use crate::task::domain::TaskId;

/// `POST /projects` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    /// Task the new project references.
    pub task_id: TaskId,
}

/// `POST /projects/reorder` body.
///
/// Both fields are optional on the wire so that an incomplete body is
/// reported as invalid data instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderProjectBody {
    /// Project to move.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// `"up"` or `"down"`.
    #[serde(default)]
    pub move_direction: Option<String>,
}

impl ReorderProjectBody {
    /// Creates a complete reorder body.
    #[must_use]
    pub fn new(project_id: ProjectId, direction: MoveDirection) -> Self {
        Self {
            project_id: Some(project_id),
            move_direction: Some(direction.as_str().to_owned()),
        }
    }
}

/// `POST /projects/run` body.
///
/// `taskIds` holds project identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunProjectsBody {
    /// Projects to score.
    pub task_ids: Vec<ProjectId>,
    /// Opaque scorer parameters.
    #[serde(flatten)]
    pub parameters: RunParameters,
}

/// `POST /users/email-check/{email}` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCheckResponse {
    /// Whether an account already uses the email.
    pub email_duplicated: bool,
}

//! Task operation kinds.

use super::ParseTaskKindError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation a task performs when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    /// Changes the status of a target.
    SetStatus,
    /// Runs a target.
    Run,
    /// Deletes a target.
    Delete,
    /// Creates a target.
    Create,
    /// Modifies a target.
    Modify,
}

impl TaskKind {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SetStatus => "set-status",
            Self::Run => "run",
            Self::Delete => "delete",
            Self::Create => "create",
            Self::Modify => "modify",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "set-status" => Ok(Self::SetStatus),
            "run" => Ok(Self::Run),
            "delete" => Ok(Self::Delete),
            "create" => Ok(Self::Create),
            "modify" => Ok(Self::Modify),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

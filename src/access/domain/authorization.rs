//! Permission tags granted to dashboard users.

use super::ParseAuthorizationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Named permission granted to a user.
///
/// [`Authorization::Super`] is a wildcard that satisfies every permission
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Authorization {
    /// May open the users list.
    ViewUsers,
    /// May edit users.
    EditUsers,
    /// May delete users.
    DeleteUsers,
    /// May open the tasks list.
    ViewTasks,
    /// May edit tasks.
    EditTasks,
    /// May delete tasks.
    DeleteTasks,
    /// May open the projects list.
    ViewProjects,
    /// May create, reorder and run projects.
    EditProjects,
    /// May delete projects.
    DeleteProjects,
    /// Wildcard granting every permission.
    Super,
}

impl Authorization {
    /// Every known authorization, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::ViewUsers,
        Self::EditUsers,
        Self::DeleteUsers,
        Self::ViewTasks,
        Self::EditTasks,
        Self::DeleteTasks,
        Self::ViewProjects,
        Self::EditProjects,
        Self::DeleteProjects,
        Self::Super,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewUsers => "VIEW_USERS",
            Self::EditUsers => "EDIT_USERS",
            Self::DeleteUsers => "DELETE_USERS",
            Self::ViewTasks => "VIEW_TASKS",
            Self::EditTasks => "EDIT_TASKS",
            Self::DeleteTasks => "DELETE_TASKS",
            Self::ViewProjects => "VIEW_PROJECTS",
            Self::EditProjects => "EDIT_PROJECTS",
            Self::DeleteProjects => "DELETE_PROJECTS",
            Self::Super => "SUPER",
        }
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Authorization {
    type Error = ParseAuthorizationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
            .ok_or_else(|| ParseAuthorizationError(value.to_owned()))
    }
}

/// Set of authorizations held by one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationSet(BTreeSet<Authorization>);

impl AuthorizationSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `true` when the set holds the given authorization.
    #[must_use]
    pub fn contains(&self, authorization: Authorization) -> bool {
        self.0.contains(&authorization)
    }

    /// Returns `true` when the set holds the `SUPER` wildcard.
    #[must_use]
    pub fn is_super(&self) -> bool {
        self.contains(Authorization::Super)
    }

    /// Returns `true` when the set holds no authorizations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the held authorizations in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = Authorization> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Authorization> for AuthorizationSet {
    fn from_iter<I: IntoIterator<Item = Authorization>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Authorization; N]> for AuthorizationSet {
    fn from(value: [Authorization; N]) -> Self {
        value.into_iter().collect()
    }
}

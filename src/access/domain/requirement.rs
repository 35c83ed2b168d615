//! Permission requirements attached to routes and actions.

use super::Authorization;

/// Permissions demanded by a route or action.
///
/// An empty requirement only asks for an authenticated caller. A non-empty
/// requirement is satisfied by holding any one of the listed permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirement(Vec<Authorization>);

impl Requirement {
    /// Requirement satisfied by any authenticated caller.
    #[must_use]
    pub const fn authenticated() -> Self {
        Self(Vec::new())
    }

    /// Requirement satisfied by any of the given permissions.
    #[must_use]
    pub fn any_of(authorizations: impl IntoIterator<Item = Authorization>) -> Self {
        Self(authorizations.into_iter().collect())
    }

    /// Returns the listed permissions.
    #[must_use]
    pub fn authorizations(&self) -> &[Authorization] {
        &self.0
    }

    /// Returns `true` when no specific permission is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Authorization> for Requirement {
    fn from(value: Authorization) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<Authorization>> for Requirement {
    fn from(value: Vec<Authorization>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[Authorization; N]> for Requirement {
    fn from(value: [Authorization; N]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Option<Vec<Authorization>>> for Requirement {
    fn from(value: Option<Vec<Authorization>>) -> Self {
        value.map_or_else(Self::authenticated, Self)
    }
}

/// Dashboard routes guarded by the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/users`
    Users,
    /// `/projects`
    Projects,
    /// `/tasks`
    Tasks,
    /// `/tasks/{id}/edit`
    EditTask,
}

impl Route {
    /// Returns the permissions required to open the route.
    #[must_use]
    pub fn requirement(self) -> Requirement {
        match self {
            Self::Users => Authorization::ViewUsers.into(),
            Self::Projects => Authorization::ViewProjects.into(),
            Self::Tasks => Authorization::ViewTasks.into(),
            Self::EditTask => Authorization::EditTasks.into(),
        }
    }
}

/// Dashboard actions gated behind a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Edit a user.
    EditUser,
    /// Delete a user.
    DeleteUser,
    /// Edit a task.
    EditTask,
    /// Delete a task.
    DeleteTask,
    /// Create, reorder or run projects.
    EditProjects,
    /// Delete a project.
    DeleteProject,
}

impl Action {
    /// Returns the permissions required to perform the action.
    #[must_use]
    pub fn requirement(self) -> Requirement {
        match self {
            Self::EditUser => Authorization::EditUsers.into(),
            Self::DeleteUser => Authorization::DeleteUsers.into(),
            Self::EditTask => Authorization::EditTasks.into(),
            Self::DeleteTask => Authorization::DeleteTasks.into(),
            Self::EditProjects => Authorization::EditProjects.into(),
            Self::DeleteProject => Authorization::DeleteProjects.into(),
        }
    }
}

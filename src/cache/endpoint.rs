//! Dashboard reads and writes with the tags they provide or invalidate.

use super::{EntityKind, QueryTag};
use crate::project::domain::ProjectId;
use crate::task::domain::TaskId;
use crate::user::domain::UserId;
use std::fmt::Debug;
use std::hash::Hash;

/// Key of a cacheable read.
pub trait CacheKey: Clone + Debug + Eq + Hash + Send + Sync + 'static {
    /// Tags provided by the read; invalidating any of them evicts it.
    fn provides(&self) -> Vec<QueryTag>;
}

/// Cacheable dashboard read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// Ordered project list.
    Projects,
    /// Task list.
    Tasks,
    /// Single task.
    Task(TaskId),
    /// User list.
    Users,
    /// Single user.
    User(UserId),
    /// Session status of the caller.
    CheckAuthenticated,
}

impl CacheKey for Query {
    fn provides(&self) -> Vec<QueryTag> {
        match self {
            Self::Projects => vec![QueryTag::list(EntityKind::Project)],
            Self::Tasks => vec![QueryTag::list(EntityKind::Task)],
            Self::Task(id) => vec![QueryTag::entity(EntityKind::Task, id.value())],
            Self::Users => vec![QueryTag::list(EntityKind::User)],
            Self::User(id) => vec![QueryTag::entity(EntityKind::User, id.value())],
            Self::CheckAuthenticated => vec![QueryTag::kind(EntityKind::Auth)],
        }
    }
}

/// Dashboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// Project creation.
    CreateProject,
    /// Bulk project run.
    RunProjects,
    /// Project reorder.
    ReorderProject,
    /// Project deletion.
    DeleteProject(ProjectId),
    /// Task creation.
    CreateTask,
    /// Task edit.
    EditTask(TaskId),
    /// Task deletion.
    DeleteTask(TaskId),
    /// User creation.
    CreateUser,
    /// User edit.
    EditUser(UserId),
    /// User deletion.
    DeleteUser(UserId),
    /// Email availability check.
    CheckUserEmail,
    /// Login.
    Login,
}

impl Mutation {
    /// Tags evicted after the write succeeds.
    ///
    /// User edits and deletions also evict the session check, since the
    /// signed-in user's roles may have changed.
    #[must_use]
    pub fn invalidates(self) -> Vec<QueryTag> {
        let project_list = QueryTag::list(EntityKind::Project);
        let task_list = QueryTag::list(EntityKind::Task);
        let user_list = QueryTag::list(EntityKind::User);
        match self {
            Self::CreateProject | Self::RunProjects | Self::ReorderProject => vec![project_list],
            Self::DeleteProject(id) => vec![
                project_list,
                QueryTag::entity(EntityKind::Project, id.value()),
            ],
            Self::CreateTask => vec![task_list],
            Self::EditTask(id) | Self::DeleteTask(id) => {
                vec![task_list, QueryTag::entity(EntityKind::Task, id.value())]
            }
            Self::CreateUser => vec![user_list],
            Self::EditUser(id) | Self::DeleteUser(id) => vec![
                user_list,
                QueryTag::entity(EntityKind::User, id.value()),
                QueryTag::kind(EntityKind::Auth),
            ],
            Self::CheckUserEmail => Vec::new(),
            Self::Login => vec![QueryTag::kind(EntityKind::Auth)],
        }
    }

    /// Returns whether the write discards the whole cache on success.
    #[must_use]
    pub const fn resets_cache(self) -> bool {
        matches!(self, Self::Login)
    }
}

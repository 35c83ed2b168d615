//! Seed data loaded into the in-memory stores.

use mockable::Clock;
use thiserror::Error;

use crate::access::domain::{Authorization, AuthorizationSet};
use crate::project::domain::{Project, ProjectId, ProjectOrder};
use crate::task::domain::{
    Task, TaskDefinition, TaskDomainError, TaskId, TaskKind, TaskName, TaskParameter,
};
use crate::user::domain::{Email, User, UserDomainError, UserId, UserProfile, UserStatus};

/// Errors raised when a fixture fails validation.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A seed user is invalid.
    #[error(transparent)]
    User(#[from] UserDomainError),
    /// A seed task is invalid.
    #[error(transparent)]
    Task(#[from] TaskDomainError),
}

/// Initial store contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixtures {
    /// Seed users.
    pub users: Vec<User>,
    /// Seed tasks.
    pub tasks: Vec<Task>,
    /// Seed projects, one per task.
    pub projects: Vec<Project>,
}

impl Fixtures {
    /// Builds the seed data, stamping tasks with the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if a seed record fails validation.
    pub fn load(clock: &impl Clock) -> Result<Self, FixtureError> {
        let users = vec![
            seed_user(
                1,
                ("Super", "Admin", "super@admin.com"),
                AuthorizationSet::from([Authorization::Super]),
            )?,
            seed_user(
                2,
                ("Jane", "Smith", "jane@smith.com"),
                AuthorizationSet::from([
                    Authorization::DeleteProjects,
                    Authorization::EditProjects,
                    Authorization::ViewProjects,
                ]),
            )?,
        ];
        let tasks = [
            (1, TaskKind::Create, "A task is created"),
            (2, TaskKind::Modify, "this is not a task"),
            (3, TaskKind::Modify, "Do landry"),
        ]
        .into_iter()
        .map(|(id, kind, description)| seed_task(id, kind, description, clock))
        .collect::<Result<Vec<_>, _>>()?;
        let projects = tasks
            .iter()
            .map(|task| {
                let id = task.id().value();
                Project::new(ProjectId::new(id), task.id(), ProjectOrder::new(id))
            })
            .collect();
        Ok(Self {
            users,
            tasks,
            projects,
        })
    }

    /// Empty store contents.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            users: Vec::new(),
            tasks: Vec::new(),
            projects: Vec::new(),
        }
    }
}

fn seed_user(
    id: u64,
    (first_name, last_name, email): (&str, &str, &str),
    roles: AuthorizationSet,
) -> Result<User, FixtureError> {
    let profile = UserProfile::new(
        first_name,
        last_name,
        Email::new(email)?,
        UserStatus::Active,
        roles,
    )?;
    Ok(User::new(UserId::new(id), profile))
}

fn seed_task(
    id: u64,
    kind: TaskKind,
    description: &str,
    clock: &impl Clock,
) -> Result<Task, FixtureError> {
    let definition = TaskDefinition {
        name: TaskName::new(format!("Task ({id})"))?,
        description: Some(description.to_owned()),
        kind,
        parameters: vec![TaskParameter::new("hey", "hoy")?],
    };
    Ok(Task::new(TaskId::new(id), definition, clock))
}

//! Composition root and one handler per REST endpoint.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::{debug, warn};

use super::{ApiError, ApiResult, CreateProjectBody, EmailCheckResponse, ReorderProjectBody, RunProjectsBody};
use crate::auth::{
    adapters::memory::InMemoryTokenIssuer,
    domain::{AuthCheck, AuthToken, Credentials, LoginRequest},
    services::AuthenticationService,
};
use crate::config::BackofficeConfig;
use crate::mock::{FixtureError, Fixtures, SimulatedLatency};
use crate::project::{
    adapters::{UniformScorer, memory::InMemoryProjectRepository},
    domain::{MoveDirection, Project, ProjectId, ProjectView},
    services::ProjectOrderingService,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{CreateTaskRequest, EditTaskRequest, TaskCatalogService},
};
use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{User, UserId},
    services::{UserDirectoryService, UserForm},
};

/// Successful response: status code and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: T,
}

impl<T> Reply<T> {
    /// `200 OK` response.
    pub const fn ok(body: T) -> Self {
        Self { status: 200, body }
    }

    /// `201 Created` response.
    pub const fn created(body: T) -> Self {
        Self { status: 201, body }
    }
}

type Projects = ProjectOrderingService<InMemoryProjectRepository, InMemoryTaskRepository, UniformScorer>;

/// In-memory backoffice backend.
///
/// Wires every service to shared in-memory stores. Each handler mirrors one
/// REST endpoint and converts service failures into [`ApiError`] envelopes.
pub struct Backoffice {
    users: UserDirectoryService<InMemoryUserRepository>,
    tasks: TaskCatalogService<InMemoryTaskRepository, DefaultClock>,
    projects: Projects,
    auth: AuthenticationService<InMemoryUserRepository, InMemoryTokenIssuer>,
}

impl Backoffice {
    /// Builds a backend from configuration, loading the fixtures when
    /// `store.seed` is set.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the seed data fails validation.
    pub fn from_config(config: &BackofficeConfig) -> Result<Self, FixtureError> {
        let fixtures = if config.store.seed {
            Fixtures::load(&DefaultClock)?
        } else {
            Fixtures::empty()
        };
        let scorer = config.scoring.rng_seed.map_or_else(
            || UniformScorer::new(config.scoring.upper_bound),
            |seed| UniformScorer::seeded(config.scoring.upper_bound, seed),
        );
        Ok(Self::with_fixtures(fixtures, config.store.latency(), scorer))
    }

    /// Builds a backend over the given store contents.
    #[must_use]
    pub fn with_fixtures(fixtures: Fixtures, latency: SimulatedLatency, scorer: UniformScorer) -> Self {
        let users = Arc::new(InMemoryUserRepository::with_users(fixtures.users).with_latency(latency));
        let tasks = Arc::new(InMemoryTaskRepository::with_tasks(fixtures.tasks).with_latency(latency));
        let projects = Arc::new(
            InMemoryProjectRepository::with_projects(fixtures.projects).with_latency(latency),
        );
        let clock = Arc::new(DefaultClock);
        Self {
            users: UserDirectoryService::new(Arc::clone(&users)),
            tasks: TaskCatalogService::new(Arc::clone(&tasks), clock),
            projects: ProjectOrderingService::new(projects, tasks, Arc::new(scorer)),
            auth: AuthenticationService::new(users, Arc::new(InMemoryTokenIssuer::new())),
        }
    }

    /// `GET /projects`
    ///
    /// # Errors
    ///
    /// Returns an internal error when a store fails.
    pub async fn list_projects(&self) -> ApiResult<Reply<Vec<ProjectView>>> {
        Ok(Reply::ok(self.projects.list_ordered().await?))
    }

    /// `POST /projects`
    ///
    /// # Errors
    ///
    /// Returns an internal error when a store fails.
    pub async fn create_project(&self, body: CreateProjectBody) -> ApiResult<Reply<Project>> {
        Ok(Reply::created(self.projects.create(body.task_id).await?))
    }

    /// `DELETE /projects/{id}`
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the project does not exist.
    pub async fn delete_project(&self, id: ProjectId) -> ApiResult<Reply<()>> {
        self.projects.delete(id).await?;
        Ok(Reply::ok(()))
    }

    /// `POST /projects/reorder`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_DATA` for a missing field or unknown direction, and
    /// `NOT_FOUND` when the project does not exist.
    pub async fn reorder_project(&self, body: ReorderProjectBody) -> ApiResult<Reply<()>> {
        let (Some(project_id), Some(raw_direction)) = (body.project_id, body.move_direction) else {
            warn!("reorder rejected: missing fields");
            return Err(ApiError::invalid_data(
                "Missing required data (moveDirection, projectId)",
            ));
        };
        let direction = MoveDirection::try_from(raw_direction.as_str())
            .map_err(|err| ApiError::invalid_data(err.to_string()))?;
        self.projects.reorder(project_id, direction).await?;
        Ok(Reply::ok(()))
    }

    /// `POST /projects/run`
    ///
    /// # Errors
    ///
    /// Returns an internal error when scoring or a store fails.
    pub async fn run_projects(&self, body: RunProjectsBody) -> ApiResult<Reply<Vec<Project>>> {
        let updated = self.projects.run(&body.task_ids, &body.parameters).await?;
        Ok(Reply::ok(updated))
    }

    /// `GET /tasks`
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store fails.
    pub async fn list_tasks(&self) -> ApiResult<Reply<Vec<Task>>> {
        Ok(Reply::ok(self.tasks.list().await?))
    }

    /// `GET /tasks/{id}`
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the task does not exist.
    pub async fn get_task(&self, id: TaskId) -> ApiResult<Reply<Task>> {
        Ok(Reply::ok(self.tasks.get(id).await?))
    }

    /// `POST /tasks`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_DATA` for a blank name.
    pub async fn create_task(&self, body: CreateTaskRequest) -> ApiResult<Reply<Task>> {
        Ok(Reply::created(self.tasks.create(body).await?))
    }

    /// `PUT /tasks/{id}`
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` or `INVALID_DATA`.
    pub async fn edit_task(&self, id: TaskId, body: EditTaskRequest) -> ApiResult<Reply<Task>> {
        Ok(Reply::ok(self.tasks.edit(id, body).await?))
    }

    /// `DELETE /tasks/{id}`
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the task does not exist.
    pub async fn delete_task(&self, id: TaskId) -> ApiResult<Reply<()>> {
        self.tasks.delete(id).await?;
        Ok(Reply::ok(()))
    }

    /// `GET /users`
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store fails.
    pub async fn list_users(&self) -> ApiResult<Reply<Vec<User>>> {
        Ok(Reply::ok(self.users.list().await?))
    }

    /// `GET /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the user does not exist.
    pub async fn get_user(&self, id: UserId) -> ApiResult<Reply<User>> {
        Ok(Reply::ok(self.users.get(id).await?))
    }

    /// `POST /users`
    ///
    /// # Errors
    ///
    /// Returns `DUPLICATED_EMAIL` or `INVALID_DATA`.
    pub async fn create_user(&self, body: UserForm) -> ApiResult<Reply<User>> {
        Ok(Reply::created(self.users.create(body).await?))
    }

    /// `PUT /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND`, `DUPLICATED_EMAIL` or `INVALID_DATA`.
    pub async fn edit_user(&self, id: UserId, body: UserForm) -> ApiResult<Reply<User>> {
        Ok(Reply::ok(self.users.edit(id, body).await?))
    }

    /// `DELETE /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the user does not exist.
    pub async fn delete_user(&self, id: UserId) -> ApiResult<Reply<()>> {
        self.users.delete(id).await?;
        Ok(Reply::ok(()))
    }

    /// `POST /users/email-check/{email}`
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store fails.
    pub async fn check_user_email(&self, email: &str) -> ApiResult<Reply<EmailCheckResponse>> {
        let email_duplicated = self.users.is_email_taken(email).await?;
        debug!(email_duplicated, "email checked");
        Ok(Reply::ok(EmailCheckResponse { email_duplicated }))
    }

    /// `GET /auth/check-authenticated`; `header` is the raw
    /// `Authentication` header value.
    ///
    /// # Errors
    ///
    /// Returns an internal error when a store fails; anonymous callers get
    /// a successful unauthenticated status.
    pub async fn check_authenticated(&self, header: Option<&str>) -> ApiResult<Reply<AuthCheck>> {
        let token = header
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(AuthToken::new);
        Ok(Reply::ok(self.auth.check_authenticated(token.as_ref()).await?))
    }

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns `WRONG_CREDENTIALS` for an unknown email.
    pub async fn login(&self, body: LoginRequest) -> ApiResult<Reply<Credentials>> {
        Ok(Reply::ok(self.auth.login(body).await?))
    }

    /// Ends a session. Not part of the REST surface of the mock backend; the
    /// dashboard client calls it when signing out.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the token store fails.
    pub async fn logout(&self, token: &AuthToken) -> ApiResult<Reply<bool>> {
        Ok(Reply::ok(self.auth.logout(token).await?))
    }
}

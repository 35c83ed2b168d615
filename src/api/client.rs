//! Dashboard-side client: cached reads, invalidating writes and the
//! access gate.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::watch;
use tracing::{debug, info};

use super::{
    ApiError, ApiErrorKind, ApiResult, Backoffice, CreateProjectBody, ReorderProjectBody, Reply,
    RunProjectsBody,
};
use crate::access::domain::{AccessDenied, Action, Requirement, Route};
use crate::access::services::{AccessState, can_perform, is_allowed, require, require_route};
use crate::auth::domain::{AuthCheck, AuthToken, LoginRequest};
use crate::cache::{Mutation, Query, QueryCache};
use crate::project::domain::{MoveDirection, Project, ProjectId, ProjectView, RunParameters};
use crate::task::{
    domain::{Task, TaskId},
    services::{CreateTaskRequest, EditTaskRequest},
};
use crate::user::{
    domain::{User, UserId},
    services::UserForm,
};

/// Value stored for a cached [`Query`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Ordered project list.
    Projects(Vec<ProjectView>),
    /// Task list.
    Tasks(Vec<Task>),
    /// Single task.
    Task(Task),
    /// User list.
    Users(Vec<User>),
    /// Single user.
    User(User),
    /// Session status.
    Auth(AuthCheck),
}

/// Client used by the dashboard views.
///
/// Reads go through a [`QueryCache`]; each successful write invalidates
/// the tags it declares, and a successful login discards the whole cache.
/// Permission checks read the cached session status and fail closed.
#[derive(Clone)]
pub struct DashboardClient {
    backend: Arc<Backoffice>,
    cache: QueryCache<Query, QueryValue>,
    token: Arc<RwLock<Option<AuthToken>>>,
}

impl DashboardClient {
    /// Creates a signed-out client.
    #[must_use]
    pub fn new(backend: Arc<Backoffice>, max_capacity: u64) -> Self {
        Self {
            backend,
            cache: QueryCache::new(max_capacity),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the current session token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Subscribes to invalidations of a read.
    #[must_use]
    pub fn subscribe(&self, query: Query) -> watch::Receiver<u64> {
        self.cache.subscribe(&query)
    }

    /// Returns the cached value of a read without fetching it.
    pub async fn cached(&self, query: Query) -> Option<QueryValue> {
        self.cache.peek(&query).await
    }

    /// Ordered project list.
    ///
    /// # Errors
    ///
    /// Returns the backend error of the fetch.
    pub async fn projects(&self) -> ApiResult<Vec<ProjectView>> {
        match self.query(Query::Projects).await? {
            QueryValue::Projects(projects) => Ok(projects),
            _ => Err(mismatch(Query::Projects)),
        }
    }

    /// Task list.
    ///
    /// # Errors
    ///
    /// Returns the backend error of the fetch.
    pub async fn tasks(&self) -> ApiResult<Vec<Task>> {
        match self.query(Query::Tasks).await? {
            QueryValue::Tasks(tasks) => Ok(tasks),
            _ => Err(mismatch(Query::Tasks)),
        }
    }

    /// Single task.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the task does not exist.
    pub async fn task(&self, id: TaskId) -> ApiResult<Task> {
        match self.query(Query::Task(id)).await? {
            QueryValue::Task(task) => Ok(task),
            _ => Err(mismatch(Query::Task(id))),
        }
    }

    /// User list.
    ///
    /// # Errors
    ///
    /// Returns the backend error of the fetch.
    pub async fn users(&self) -> ApiResult<Vec<User>> {
        match self.query(Query::Users).await? {
            QueryValue::Users(users) => Ok(users),
            _ => Err(mismatch(Query::Users)),
        }
    }

    /// Single user.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the user does not exist.
    pub async fn user(&self, id: UserId) -> ApiResult<User> {
        match self.query(Query::User(id)).await? {
            QueryValue::User(user) => Ok(user),
            _ => Err(mismatch(Query::User(id))),
        }
    }

    /// Session status of this client.
    ///
    /// # Errors
    ///
    /// Returns the backend error of the fetch.
    pub async fn check_authenticated(&self) -> ApiResult<AuthCheck> {
        match self.query(Query::CheckAuthenticated).await? {
            QueryValue::Auth(check) => Ok(check),
            _ => Err(mismatch(Query::CheckAuthenticated)),
        }
    }

    /// Current access state; a failed session check yields
    /// [`AccessState::Failed`].
    pub async fn access_state(&self) -> AccessState {
        self.check_authenticated()
            .await
            .map_or(AccessState::Failed, |check| check.access_state())
    }

    /// Returns whether the caller satisfies `requirement`.
    pub async fn can(&self, requirement: &Requirement) -> bool {
        is_allowed(&self.access_state().await, requirement)
    }

    /// Returns whether the caller may perform `action`.
    pub async fn can_perform(&self, action: Action) -> bool {
        can_perform(&self.access_state().await, action)
    }

    /// Checks `requirement` and reports why access is denied.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the caller is anonymous or lacks every
    /// listed authorization.
    pub async fn require(&self, requirement: &Requirement) -> Result<(), AccessDenied> {
        require(&self.access_state().await, requirement)
    }

    /// Checks the authorization guarding a dashboard route.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the route may not be opened.
    pub async fn open_route(&self, route: Route) -> Result<(), AccessDenied> {
        require_route(&self.access_state().await, route)
    }

    /// Signs in and discards every cached read.
    ///
    /// # Errors
    ///
    /// Returns `WRONG_CREDENTIALS` for an unknown email; the cache and the
    /// current session are left untouched.
    pub async fn login(&self, email: &str) -> ApiResult<()> {
        let credentials = self.backend.login(LoginRequest::new(email)).await?.body;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(credentials.token);
        self.after(Mutation::Login).await;
        info!("signed in");
        Ok(())
    }

    /// Signs out and discards every cached read.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the backend fails to revoke the token.
    pub async fn logout(&self) -> ApiResult<()> {
        let previous = self
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(token) = previous {
            self.backend.logout(&token).await?;
        }
        self.cache.reset();
        info!("signed out");
        Ok(())
    }

    /// Creates a project for a task.
    ///
    /// # Errors
    ///
    /// Returns the backend error; nothing is invalidated on failure.
    pub async fn create_project(&self, task_id: TaskId) -> ApiResult<Project> {
        let reply = self.backend.create_project(CreateProjectBody { task_id }).await;
        self.mutate(Mutation::CreateProject, reply).await
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND`; nothing is invalidated on failure.
    pub async fn delete_project(&self, id: ProjectId) -> ApiResult<()> {
        let reply = self.backend.delete_project(id).await;
        self.mutate(Mutation::DeleteProject(id), reply).await
    }

    /// Moves a project one step.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND`; nothing is invalidated on failure.
    pub async fn reorder_project(&self, id: ProjectId, direction: MoveDirection) -> ApiResult<()> {
        let reply = self
            .backend
            .reorder_project(ReorderProjectBody::new(id, direction))
            .await;
        self.mutate(Mutation::ReorderProject, reply).await
    }

    /// Runs the listed projects.
    ///
    /// # Errors
    ///
    /// Returns the backend error; nothing is invalidated on failure.
    pub async fn run_projects(
        &self,
        ids: Vec<ProjectId>,
        parameters: RunParameters,
    ) -> ApiResult<Vec<Project>> {
        let reply = self
            .backend
            .run_projects(RunProjectsBody {
                task_ids: ids,
                parameters,
            })
            .await;
        self.mutate(Mutation::RunProjects, reply).await
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_DATA`; nothing is invalidated on failure.
    pub async fn create_task(&self, request: CreateTaskRequest) -> ApiResult<Task> {
        let reply = self.backend.create_task(request).await;
        self.mutate(Mutation::CreateTask, reply).await
    }

    /// Edits a task.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` or `INVALID_DATA`; nothing is invalidated on
    /// failure.
    pub async fn edit_task(&self, id: TaskId, request: EditTaskRequest) -> ApiResult<Task> {
        let reply = self.backend.edit_task(id, request).await;
        self.mutate(Mutation::EditTask(id), reply).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND`; nothing is invalidated on failure.
    pub async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        let reply = self.backend.delete_task(id).await;
        self.mutate(Mutation::DeleteTask(id), reply).await
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns `DUPLICATED_EMAIL` or `INVALID_DATA`; nothing is invalidated
    /// on failure.
    pub async fn create_user(&self, form: UserForm) -> ApiResult<User> {
        let reply = self.backend.create_user(form).await;
        self.mutate(Mutation::CreateUser, reply).await
    }

    /// Edits a user.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND`, `DUPLICATED_EMAIL` or `INVALID_DATA`; nothing is
    /// invalidated on failure.
    pub async fn edit_user(&self, id: UserId, form: UserForm) -> ApiResult<User> {
        let reply = self.backend.edit_user(id, form).await;
        self.mutate(Mutation::EditUser(id), reply).await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND`; nothing is invalidated on failure.
    pub async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        let reply = self.backend.delete_user(id).await;
        self.mutate(Mutation::DeleteUser(id), reply).await
    }

    /// Returns whether an account already uses `email`.
    ///
    /// # Errors
    ///
    /// Returns the backend error of the check.
    pub async fn check_user_email(&self, email: &str) -> ApiResult<bool> {
        let reply = self.backend.check_user_email(email).await;
        let response = self.mutate(Mutation::CheckUserEmail, reply).await?;
        Ok(response.email_duplicated)
    }

    async fn query(&self, query: Query) -> ApiResult<QueryValue> {
        let backend = Arc::clone(&self.backend);
        let token = self.token();
        self.cache
            .fetch(query, async move { execute(&backend, query, token).await })
            .await
            .map_err(|err| ApiError::clone(&err))
    }

    async fn mutate<T>(&self, mutation: Mutation, reply: ApiResult<Reply<T>>) -> ApiResult<T> {
        let body = reply?.body;
        self.after(mutation).await;
        Ok(body)
    }

    async fn after(&self, mutation: Mutation) {
        if mutation.resets_cache() {
            self.cache.reset();
        } else {
            let evicted = self.cache.invalidate(&mutation.invalidates()).await;
            debug!(?mutation, evicted = evicted.len(), "mutation applied");
        }
    }
}

async fn execute(
    backend: &Backoffice,
    query: Query,
    token: Option<AuthToken>,
) -> ApiResult<QueryValue> {
    let value = match query {
        Query::Projects => QueryValue::Projects(backend.list_projects().await?.body),
        Query::Tasks => QueryValue::Tasks(backend.list_tasks().await?.body),
        Query::Task(id) => QueryValue::Task(backend.get_task(id).await?.body),
        Query::Users => QueryValue::Users(backend.list_users().await?.body),
        Query::User(id) => QueryValue::User(backend.get_user(id).await?.body),
        Query::CheckAuthenticated => {
            let header = token.as_ref().map(AuthToken::as_str);
            QueryValue::Auth(backend.check_authenticated(header).await?.body)
        }
    };
    Ok(value)
}

fn mismatch(query: Query) -> ApiError {
    ApiError::new(
        ApiErrorKind::Internal,
        format!("cached value does not match {query:?}"),
    )
}

//! Error envelope returned by every endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::error;

use crate::access::domain::AccessDenied;
use crate::auth::services::AuthServiceError;
use crate::project::{ports::ProjectRepositoryError, services::ProjectServiceError};
use crate::task::{ports::TaskRepositoryError, services::TaskServiceError};
use crate::user::{ports::UserRepositoryError, services::UserServiceError};

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorKind {
    /// The addressed entity does not exist.
    NotFound,
    /// Another user already holds the email address.
    DuplicatedEmail,
    /// The request body is incomplete or invalid.
    InvalidData,
    /// Login with an unknown account.
    WrongCredentials,
    /// The caller has no valid session.
    Unauthenticated,
    /// The caller lacks the required authorization.
    Unauthorized,
    /// Unexpected backend failure.
    Internal,
}

impl ApiErrorKind {
    /// HTTP status code of the category.
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::DuplicatedEmail => 409,
            Self::InvalidData => 400,
            Self::WrongCredentials | Self::Unauthenticated => 401,
            Self::Unauthorized => 403,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "NOT_FOUND",
            Self::DuplicatedEmail => "DUPLICATED_EMAIL",
            Self::InvalidData => "INVALID_DATA",
            Self::WrongCredentials => "WRONG_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Internal => "INTERNAL",
        };
        f.write_str(name)
    }
}

/// `{message, type}` error body.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ApiError {
    message: String,
    #[serde(rename = "type")]
    kind: ApiErrorKind,
}

/// Result type for endpoint handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Creates an error of the given category.
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Creates an [`ApiErrorKind::InvalidData`] error.
    #[must_use]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidData, message)
    }

    /// Creates an [`ApiErrorKind::Internal`] error and logs its cause.
    #[must_use]
    pub fn internal(cause: &dyn std::error::Error) -> Self {
        error!(error = %cause, "request failed");
        Self::new(ApiErrorKind::Internal, "Internal Error")
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.kind.status()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_data(err.to_string())
    }
}

impl From<AccessDenied> for ApiError {
    fn from(err: AccessDenied) -> Self {
        let kind = match &err {
            AccessDenied::Unauthenticated => ApiErrorKind::Unauthenticated,
            AccessDenied::Unauthorized { .. } => ApiErrorKind::Unauthorized,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<UserServiceError> for ApiError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::Domain(domain) => Self::invalid_data(domain.to_string()),
            UserServiceError::Repository(UserRepositoryError::NotFound(_)) => {
                Self::new(ApiErrorKind::NotFound, "User Not Found")
            }
            UserServiceError::Repository(UserRepositoryError::DuplicatedEmail(_)) => {
                Self::new(ApiErrorKind::DuplicatedEmail, "Email Duplicated")
            }
            UserServiceError::Repository(other) => Self::internal(&other),
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(domain) => Self::invalid_data(domain.to_string()),
            TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::new(ApiErrorKind::NotFound, "Task Not Found")
            }
            TaskServiceError::Repository(other) => Self::internal(&other),
        }
    }
}

impl From<ProjectServiceError> for ApiError {
    fn from(err: ProjectServiceError) -> Self {
        match err {
            ProjectServiceError::Repository(ProjectRepositoryError::NotFound(_)) => {
                Self::new(ApiErrorKind::NotFound, "Project Not Found")
            }
            ProjectServiceError::Repository(other) => Self::internal(&other),
            ProjectServiceError::Domain(domain) => Self::internal(&domain),
            ProjectServiceError::TaskRepository(task) => Self::internal(&task),
        }
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::WrongCredentials => {
                Self::new(ApiErrorKind::WrongCredentials, "wrong credentials")
            }
            AuthServiceError::Issuer(issuer) => Self::internal(&issuer),
            AuthServiceError::Users(users) => Self::internal(&users),
        }
    }
}

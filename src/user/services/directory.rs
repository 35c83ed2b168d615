//! Service layer for user account management.

use crate::access::domain::AuthorizationSet;
use crate::user::{
    domain::{Email, User, UserDomainError, UserId, UserProfile, UserStatus},
    ports::{UserRepository, UserRepositoryError},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Editable user fields as submitted by the dashboard forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address; must be unique.
    pub email: String,
    /// Account status.
    #[serde(default)]
    pub status: UserStatus,
    /// Granted authorizations.
    #[serde(default)]
    pub roles: AuthorizationSet,
}

impl UserForm {
    /// Creates an active user form without roles.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            status: UserStatus::Active,
            roles: AuthorizationSet::new(),
        }
    }

    /// Sets the account status.
    #[must_use]
    pub const fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the granted authorizations.
    #[must_use]
    pub fn with_roles(mut self, roles: impl Into<AuthorizationSet>) -> Self {
        self.roles = roles.into();
        self
    }

    fn into_profile(self) -> Result<UserProfile, UserDomainError> {
        let email = Email::new(self.email)?;
        UserProfile::new(
            self.first_name,
            self.last_name,
            email,
            self.status,
            self.roles,
        )
    }
}

/// Service-level errors for user management.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User account orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> UserServiceResult<Vec<User>> {
        let users = self.repository.list_all().await?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    /// Returns a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] (wrapped) when the user
    /// does not exist.
    pub async fn get(&self, id: UserId) -> UserServiceResult<User> {
        self.find_or_error(id).await
    }

    /// Creates a user with the next free identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Domain`] when the form is invalid and
    /// [`UserRepositoryError::DuplicatedEmail`] (wrapped) when the email is
    /// already in use.
    pub async fn create(&self, form: UserForm) -> UserServiceResult<User> {
        let profile = form.into_profile()?;
        if self.repository.find_by_email(profile.email()).await?.is_some() {
            warn!(email = %profile.email(), "rejected user with duplicated email");
            return Err(UserRepositoryError::DuplicatedEmail(profile.email().clone()).into());
        }
        let id = self.repository.next_id().await?;
        let user = User::new(id, profile);
        self.repository.upsert(&user).await?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Replaces the editable fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] (wrapped) when the user does
    /// not exist and [`UserRepositoryError::DuplicatedEmail`] (wrapped) when
    /// another user holds the new email.
    pub async fn edit(&self, id: UserId, form: UserForm) -> UserServiceResult<User> {
        let mut user = self.find_or_error(id).await?;
        user.apply(form.into_profile()?);
        self.repository.upsert(&user).await?;
        info!(user_id = %id, "user updated");
        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] (wrapped) when the user does
    /// not exist.
    pub async fn delete(&self, id: UserId) -> UserServiceResult<()> {
        self.repository.delete(id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    /// Reports whether an email address is already held by a user.
    ///
    /// Malformed addresses are never held, so they report `false`.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn is_email_taken(&self, email: &str) -> UserServiceResult<bool> {
        let Ok(candidate) = Email::new(email) else {
            return Ok(false);
        };
        Ok(self.repository.find_by_email(&candidate).await?.is_some())
    }

    async fn find_or_error(&self, id: UserId) -> UserServiceResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserRepositoryError::NotFound(id).into())
    }
}

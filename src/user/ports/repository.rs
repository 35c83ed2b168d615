//! Repository port for user persistence and lookup.

use crate::user::domain::{Email, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
///
/// Implementations assume a single logical writer: [`next_id`] followed by
/// [`upsert`] is not atomic across callers.
///
/// [`next_id`]: UserRepository::next_id
/// [`upsert`]: UserRepository::upsert
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every live user in id order.
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds a user by email address.
    ///
    /// Returns `None` when no user holds the address.
    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<User>>;

    /// Inserts or replaces a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicatedEmail`] when another user
    /// already holds the email address.
    async fn upsert(&self, user: &User) -> UserRepositoryResult<()>;

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not
    /// exist.
    async fn delete(&self, id: UserId) -> UserRepositoryResult<()>;

    /// Returns the identifier the next created user receives:
    /// `max(existing ids) + 1`, or `1` for an empty store.
    async fn next_id(&self) -> UserRepositoryResult<UserId>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Another user already holds the email address.
    #[error("duplicated email: {0}")]
    DuplicatedEmail(Email),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

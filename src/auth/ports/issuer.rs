//! Port for issuing and resolving session tokens.

use crate::auth::domain::AuthToken;
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for token issuer operations.
pub type TokenIssuerResult<T> = Result<T, TokenIssuerError>;

/// Issues session tokens and maps them back to accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Issues a new token for the user.
    async fn issue(&self, user: UserId) -> TokenIssuerResult<AuthToken>;

    /// Resolves a token to the user it was issued for.
    ///
    /// Returns `None` for unknown or revoked tokens.
    async fn resolve(&self, token: &AuthToken) -> TokenIssuerResult<Option<UserId>>;

    /// Revokes a token. Returns `false` when the token was not known.
    async fn revoke(&self, token: &AuthToken) -> TokenIssuerResult<bool>;
}

/// Errors returned by token issuer implementations.
#[derive(Debug, Clone, Error)]
pub enum TokenIssuerError {
    /// Token storage failure.
    #[error("token store error: {0}")]
    Store(Arc<dyn std::error::Error + Send + Sync>),
}

impl TokenIssuerError {
    /// Wraps a storage error.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Arc::new(err))
    }
}

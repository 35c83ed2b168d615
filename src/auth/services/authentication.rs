//! Login and session resolution.

use crate::auth::{
    domain::{AuthCheck, AuthToken, Credentials, LoginRequest},
    ports::{TokenIssuer, TokenIssuerError},
};
use crate::user::{
    domain::Email,
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for authentication.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// No account matches the submitted credentials.
    #[error("wrong credentials")]
    WrongCredentials,
    /// Token issuer failed.
    #[error(transparent)]
    Issuer(#[from] TokenIssuerError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

/// Result type for authentication operations.
pub type AuthServiceResult<T> = Result<T, AuthServiceError>;

/// Authenticates callers against the user directory.
#[derive(Clone)]
pub struct AuthenticationService<U, I>
where
    U: UserRepository,
    I: TokenIssuer,
{
    users: Arc<U>,
    issuer: Arc<I>,
}

impl<U, I> AuthenticationService<U, I>
where
    U: UserRepository,
    I: TokenIssuer,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(users: Arc<U>, issuer: Arc<I>) -> Self {
        Self { users, issuer }
    }

    /// Signs in the account owning `request.email`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::WrongCredentials`] when no account has
    /// that email, including malformed addresses.
    pub async fn login(&self, request: LoginRequest) -> AuthServiceResult<Credentials> {
        let Ok(email) = Email::new(request.email) else {
            warn!("login rejected: malformed email");
            return Err(AuthServiceError::WrongCredentials);
        };
        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!(email = %email.as_str(), "login rejected: unknown account");
            return Err(AuthServiceError::WrongCredentials);
        };
        let token = self.issuer.issue(user.id()).await?;
        info!(user_id = %user.id(), "user logged in");
        Ok(Credentials { token })
    }

    /// Resolves the caller's session.
    ///
    /// Missing or unknown tokens, and tokens of deleted users, yield an
    /// unauthenticated status rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the token or user store fails.
    pub async fn check_authenticated(
        &self,
        token: Option<&AuthToken>,
    ) -> AuthServiceResult<AuthCheck> {
        let Some(presented) = token else {
            debug!("auth check without token");
            return Ok(AuthCheck::unauthenticated());
        };
        let Some(user_id) = self.issuer.resolve(presented).await? else {
            debug!("auth check with unknown token");
            return Ok(AuthCheck::unauthenticated());
        };
        match self.users.find_by_id(user_id).await? {
            Some(user) => {
                debug!(user_id = %user_id, "auth check resolved");
                Ok(AuthCheck::authenticated(user))
            }
            None => {
                debug!(user_id = %user_id, "auth check for deleted user");
                Ok(AuthCheck::unauthenticated())
            }
        }
    }

    /// Ends a session. Returns `false` when the token was not active.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Issuer`] when the token store fails.
    pub async fn logout(&self, token: &AuthToken) -> AuthServiceResult<bool> {
        let revoked = self.issuer.revoke(token).await?;
        info!(revoked, "session ended");
        Ok(revoked)
    }
}

//! Result of resolving the caller's session.

use crate::access::domain::AuthorizationSet;
use crate::access::services::AccessState;
use crate::user::domain::User;
use serde::{Deserialize, Serialize};

/// Authentication status of the caller.
///
/// Serializes as `{isAuthenticated, authorizations?, user?}`; the optional
/// fields are omitted for anonymous callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCheck {
    is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    authorizations: Option<AuthorizationSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<User>,
}

impl AuthCheck {
    /// Status of a caller without a valid session.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            is_authenticated: false,
            authorizations: None,
            user: None,
        }
    }

    /// Status of a caller signed in as `user`.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self {
            is_authenticated: true,
            authorizations: Some(user.roles().clone()),
            user: Some(user),
        }
    }

    /// Returns whether the caller holds a valid session.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Returns the caller's authorizations, if authenticated.
    #[must_use]
    pub const fn authorizations(&self) -> Option<&AuthorizationSet> {
        self.authorizations.as_ref()
    }

    /// Returns the signed-in user, if authenticated.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Converts the check into the state consumed by the access gate.
    ///
    /// A response claiming authentication without authorizations is treated
    /// as authenticated with an empty set.
    #[must_use]
    pub fn access_state(&self) -> AccessState {
        if !self.is_authenticated {
            return AccessState::Unauthenticated;
        }
        AccessState::Authenticated(self.authorizations.clone().unwrap_or_default())
    }
}

//! User aggregate and its editable profile.

use super::{Email, UserDomainError, UserId, UserStatus};
use crate::access::domain::AuthorizationSet;
use serde::{Deserialize, Serialize};

/// Validated, editable part of a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    first_name: String,
    last_name: String,
    email: Email,
    status: UserStatus,
    roles: AuthorizationSet,
}

impl UserProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyFirstName`] or
    /// [`UserDomainError::EmptyLastName`] for blank names.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Email,
        status: UserStatus,
        roles: AuthorizationSet,
    ) -> Result<Self, UserDomainError> {
        let first = first_name.into().trim().to_owned();
        if first.is_empty() {
            return Err(UserDomainError::EmptyFirstName);
        }
        let last = last_name.into().trim().to_owned();
        if last.is_empty() {
            return Err(UserDomainError::EmptyLastName);
        }
        Ok(Self {
            first_name: first,
            last_name: last,
            email,
            status,
            roles,
        })
    }

    /// Returns the profile email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}

/// Dashboard user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: Email,
    status: UserStatus,
    roles: AuthorizationSet,
}

impl User {
    /// Creates a user from an allocated identifier and a profile.
    #[must_use]
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        let UserProfile {
            first_name,
            last_name,
            email,
            status,
            roles,
        } = profile;
        Self {
            id,
            first_name,
            last_name,
            email,
            status,
            roles,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the unique email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the account status.
    #[must_use]
    pub const fn status(&self) -> UserStatus {
        self.status
    }

    /// Returns the granted authorizations.
    #[must_use]
    pub const fn roles(&self) -> &AuthorizationSet {
        &self.roles
    }

    /// Replaces every editable field with the given profile.
    pub fn apply(&mut self, profile: UserProfile) {
        *self = Self::new(self.id, profile);
    }
}

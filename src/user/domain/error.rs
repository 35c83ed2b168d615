//! Error types for user domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The first name is empty after trimming.
    #[error("first name must not be empty")]
    EmptyFirstName,

    /// The last name is empty after trimming.
    #[error("last name must not be empty")]
    EmptyLastName,
}

/// Error returned while parsing a user status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user status: {0}")]
pub struct ParseUserStatusError(pub String);

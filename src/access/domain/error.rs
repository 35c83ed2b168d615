//! Error types for access control.

use super::Requirement;
use thiserror::Error;

/// Reasons the access gate denies a request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessDenied {
    /// The caller is not authenticated, or the auth state is unknown.
    #[error("authentication required")]
    Unauthenticated,

    /// The caller lacks every permission the requirement lists.
    #[error("missing required authorization (any of {required:?})")]
    Unauthorized {
        /// The requirement that was not met.
        required: Requirement,
    },
}

/// Error returned while parsing an authorization name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown authorization: {0}")]
pub struct ParseAuthorizationError(pub String);

//! Domain model for permission gating.
//!
//! Authorizations, requirement lists and the route/action requirement
//! tables live here; the evaluating predicate lives in
//! [`crate::access::services`].

mod authorization;
mod error;
mod requirement;

pub use authorization::{Authorization, AuthorizationSet};
pub use error::{AccessDenied, ParseAuthorizationError};
pub use requirement::{Action, Requirement, Route};

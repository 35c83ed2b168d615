//! Orchestration services for authentication.

mod authentication;

pub use authentication::{AuthServiceError, AuthServiceResult, AuthenticationService};

//! Session tokens and authentication status.

mod check;
mod token;

pub use check::AuthCheck;
pub use token::{AuthToken, Credentials, LoginRequest};

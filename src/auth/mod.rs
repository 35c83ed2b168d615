//! Authentication against the user directory.
//!
//! A login exchanges an email for an opaque token; a session check resolves
//! the token back to a user and the authorizations that
//! [`crate::access`] evaluates.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

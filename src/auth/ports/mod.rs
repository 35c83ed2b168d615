//! Port contracts for authentication.

mod issuer;

#[cfg(test)]
pub use issuer::MockTokenIssuer;
pub use issuer::{TokenIssuer, TokenIssuerError, TokenIssuerResult};

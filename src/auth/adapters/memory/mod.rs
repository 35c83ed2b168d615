//! In-memory adapters for authentication.

mod issuer;

pub use issuer::InMemoryTokenIssuer;

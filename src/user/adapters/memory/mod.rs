//! In-memory adapters for user management.

mod user;

pub use user::InMemoryUserRepository;

//! Domain model for dashboard user accounts.

mod error;
mod ids;
mod status;
mod user;

pub use error::{ParseUserStatusError, UserDomainError};
pub use ids::{Email, UserId};
pub use status::UserStatus;
pub use user::{User, UserProfile};

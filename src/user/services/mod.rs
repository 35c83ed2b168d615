//! Application services for user account management.

mod directory;

pub use directory::{UserDirectoryService, UserForm, UserServiceError, UserServiceResult};

//! Orchestration services for project ordering.

mod ordering;

pub use ordering::{ProjectOrderingService, ProjectServiceError, ProjectServiceResult};

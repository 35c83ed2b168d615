//! Port contracts for project persistence and scoring.

mod repository;
mod scorer;

#[cfg(test)]
pub use scorer::MockProjectScorer;
pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use scorer::ProjectScorer;

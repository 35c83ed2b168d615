//! In-memory adapters for project ordering.

mod project;

pub use project::InMemoryProjectRepository;

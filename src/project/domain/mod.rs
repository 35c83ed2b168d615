//! Domain model for ordered projects.
//!
//! Projects form a strict total order through their `order` field. The
//! reorder algorithm in [`plan_reorder`] is pure and operates on a snapshot
//! of the live set; repositories run it under their own lock so the
//! snapshot and the write cannot drift apart.

mod direction;
mod error;
mod ids;
mod ordering;
mod project;

pub use direction::MoveDirection;
pub use error::{ParseMoveDirectionError, ProjectDomainError};
pub use ids::{ProjectId, ProjectOrder};
pub use ordering::{ReorderOutcome, next_order, plan_reorder, sorted_by_order};
pub use project::{Project, ProjectScore, ProjectView, RunParameters};

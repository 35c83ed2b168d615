//! Domain model for dashboard tasks.
//!
//! Tasks are independently owned records referenced by projects through a
//! weak `taskId` link.

mod error;
mod ids;
mod kind;
mod task;

pub use error::{ParseTaskKindError, TaskDomainError};
pub use ids::{TaskId, TaskName};
pub use kind::TaskKind;
pub use task::{Task, TaskDefinition, TaskParameter};

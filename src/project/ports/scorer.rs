//! Scoring port used when projects are run.

use crate::project::domain::{Project, RunParameters};

/// Produces the score recorded on a project after a run.
///
/// Scores are expected in `[0, upper_bound())`; the ordering service
/// rejects anything else before it is stored.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectScorer: Send + Sync {
    /// Scores a single project.
    fn score(&self, project: &Project, parameters: &RunParameters) -> f64;

    /// Exclusive upper bound of produced scores.
    fn upper_bound(&self) -> f64;
}

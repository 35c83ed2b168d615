//! Default project scorer drawing uniform random scores.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::project::{
    domain::{Project, RunParameters},
    ports::ProjectScorer,
};

/// Upper bound used when none is configured.
pub const DEFAULT_UPPER_BOUND: f64 = 2000.0;

/// Scorer drawing each result uniformly from `[0, upper_bound)`.
///
/// Run parameters are ignored. A fixed seed makes the sequence of scores
/// reproducible.
#[derive(Debug)]
pub struct UniformScorer {
    rng: Mutex<StdRng>,
    upper_bound: f64,
}

impl UniformScorer {
    /// Creates a scorer seeded from the operating system.
    #[must_use]
    pub fn new(upper_bound: f64) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            upper_bound,
        }
    }

    /// Creates a scorer with a deterministic seed.
    #[must_use]
    pub fn seeded(upper_bound: f64, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            upper_bound,
        }
    }
}

impl Default for UniformScorer {
    fn default() -> Self {
        Self::new(DEFAULT_UPPER_BOUND)
    }
}

impl ProjectScorer for UniformScorer {
    fn score(&self, _project: &Project, _parameters: &RunParameters) -> f64 {
        // An empty range would panic inside `random_range`.
        if !(self.upper_bound.is_finite() && self.upper_bound > 0.0) {
            return 0.0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0.0..self.upper_bound)
    }

    fn upper_bound(&self) -> f64 {
        self.upper_bound
    }
}

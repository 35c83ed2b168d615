//! Mock backend support: artificial latency and seed data.

mod fixtures;
mod latency;

pub use fixtures::{FixtureError, Fixtures};
pub use latency::SimulatedLatency;

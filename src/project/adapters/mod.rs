//! Adapter implementations for project ordering ports.

pub mod memory;
mod scoring;

pub use scoring::{DEFAULT_UPPER_BOUND, UniformScorer};

//! Step definitions for project ordering scenarios.

mod given;
mod then;
mod when;
pub mod world;

//! Ordered projects referencing tasks.
//!
//! Projects carry a dense, user-controlled `order` and an optional score
//! produced by a run. The module follows hexagonal architecture:
//!
//! - Domain types and the pure reorder algorithm in [`domain`]
//! - Port contracts for persistence and scoring in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Task management for the dashboard.
//!
//! Tasks describe an operation (`create`, `modify`, `run`, ...) with
//! key/value parameters and are referenced by projects. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Role-based access control for dashboard routes and actions.
//!
//! Every gating decision goes through [`services::has_permission`]:
//!
//! - Domain types in [`domain`]
//! - Evaluation in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;

//! REST surface of the backoffice and the dashboard client that consumes
//! it.
//!
//! [`Backoffice`] exposes one async handler per endpoint over the
//! in-memory stores. [`DashboardClient`] layers the query cache and the
//! access gate on top, the way the dashboard views use the API.

mod backoffice;
mod bodies;
mod client;
mod error;

pub use backoffice::{Backoffice, Reply};
pub use bodies::{CreateProjectBody, EmailCheckResponse, ReorderProjectBody, RunProjectsBody};
pub use client::{DashboardClient, QueryValue};
pub use error::{ApiError, ApiErrorKind, ApiResult};

#[cfg(test)]
mod tests;

//! Backoffice: users, tasks and ordered projects behind a cached,
//! permission-gated dashboard API.
//!
//! # Architecture
//!
//! Each entity module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and scoring
//! - **Adapters**: In-memory implementations of the ports
//! - **Services**: Orchestration over injected ports
//!
//! # Modules
//!
//! - [`access`]: Authorizations and the permission gate
//! - [`user`]: User accounts with unique emails
//! - [`task`]: Parameterised tasks referenced by projects
//! - [`project`]: Ordered projects, reordering and scored runs
//! - [`auth`]: Login and session resolution
//! - [`cache`]: Tag-invalidated query cache
//! - [`api`]: REST handlers and the dashboard client
//! - [`config`]: TOML configuration
//! - [`telemetry`]: Tracing subscriber setup
//! - [`mock`]: Seed data and simulated latency

pub mod access;
pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod mock;
pub mod project;
pub mod task;
pub mod telemetry;
pub mod user;

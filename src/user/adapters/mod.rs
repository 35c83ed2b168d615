//! Adapter implementations for user management ports.

pub mod memory;

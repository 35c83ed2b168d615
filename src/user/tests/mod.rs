//! Unit tests for user management.

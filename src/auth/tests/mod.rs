//! Unit tests for authentication.

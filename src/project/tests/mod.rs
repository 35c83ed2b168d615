//! Unit tests for project ordering.

//! Unit tests for the REST handlers and the dashboard client.

mod error_tests;

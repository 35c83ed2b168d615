//! Unit tests for the query cache.

mod store_tests;
mod tag_tests;

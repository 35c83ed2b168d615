//! Unit tests for the access gate.

mod domain_tests;
mod gate_tests;

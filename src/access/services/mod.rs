//! Permission evaluation services.

mod gate;

pub use gate::{AccessState, can_perform, has_permission, is_allowed, require, require_route};

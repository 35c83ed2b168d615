//! Client-side query cache.
//!
//! Reads are cached per [`Query`] key and tagged with the entities they
//! return. A successful [`Mutation`] invalidates the tags it declares,
//! evicting matching reads so the next access refetches them. Concurrent
//! reads of one key share a single fetch.

mod endpoint;
mod index;
mod store;
mod tag;

pub use endpoint::{CacheKey, Mutation, Query};
pub use index::TagIndex;
pub use store::{DEFAULT_MAX_CAPACITY, QueryCache};
pub use tag::{EntityKind, QueryTag};

#[cfg(test)]
mod tests;

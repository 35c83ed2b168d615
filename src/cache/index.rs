//! Tag to query-key index.

use super::QueryTag;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Maps each provided tag to the keys of the reads that provide it.
#[derive(Debug)]
pub struct TagIndex<K> {
    by_tag: HashMap<QueryTag, HashSet<K>>,
}

impl<K> Default for TagIndex<K> {
    fn default() -> Self {
        Self {
            by_tag: HashMap::new(),
        }
    }
}

impl<K> TagIndex<K>
where
    K: Hash + Eq + Clone,
{
    /// Records that `key` provides `tags`. Registering twice is harmless.
    pub fn register(&mut self, key: &K, tags: &[QueryTag]) {
        for tag in tags {
            self.by_tag.entry(*tag).or_default().insert(key.clone());
        }
    }

    /// Returns the distinct keys whose provided tags are covered by any of
    /// `invalidated`.
    #[must_use]
    pub fn matching(&self, invalidated: &[QueryTag]) -> Vec<K> {
        let matched: HashSet<&K> = self
            .by_tag
            .iter()
            .filter(|(provided, _)| invalidated.iter().any(|tag| tag.covers(**provided)))
            .flat_map(|(_, keys)| keys.iter())
            .collect();
        matched.into_iter().cloned().collect()
    }

    /// Returns every registered key once.
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        let all: HashSet<&K> = self.by_tag.values().flatten().collect();
        all.into_iter().cloned().collect()
    }

    /// Forgets every registration.
    pub fn clear(&mut self) {
        self.by_tag.clear();
    }
}

//! Tag-invalidated query cache with in-flight de-duplication.

use super::{CacheKey, QueryTag, TagIndex};
use moka::future::Cache;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::debug;

/// Capacity used when none is configured.
pub const DEFAULT_MAX_CAPACITY: u64 = 1_000;

/// Cache of query results keyed by `K`.
///
/// Concurrent fetches of one key share a single in-flight request; every
/// waiter receives the same value or the same shared error. Errors are not
/// cached. Each key carries a generation counter that is bumped on
/// invalidation: subscribers observe the bump, and a fetch that was in
/// flight when its key was invalidated is evicted once it completes.
#[derive(Clone)]
pub struct QueryCache<K, V>
where
    K: CacheKey,
    V: Clone + Send + Sync + 'static,
{
    entries: Cache<K, V>,
    index: Arc<Mutex<TagIndex<K>>>,
    generations: Arc<Mutex<HashMap<K, watch::Sender<u64>>>>,
}

impl<K, V> QueryCache<K, V>
where
    K: CacheKey,
    V: Clone + Send + Sync + 'static,
{
    /// Creates a cache holding at most `max_capacity` entries.
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            entries: Cache::new(max_capacity),
            index: Arc::new(Mutex::new(TagIndex::default())),
            generations: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the cached value for `key`, or runs `fetcher` to fill it.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's error, shared with every caller that awaited
    /// the same in-flight request. The failure is not cached.
    pub async fn fetch<F, E>(&self, key: K, fetcher: F) -> Result<V, Arc<E>>
    where
        F: Future<Output = Result<V, E>>,
        E: Send + Sync + 'static,
    {
        self.track(&key);
        let started = self.generation(&key);
        let result = self.entries.try_get_with(key.clone(), fetcher).await;
        if result.is_ok() {
            self.track(&key);
            if self.generation(&key) != started {
                self.entries.invalidate(&key).await;
                debug!(?key, "evicted result invalidated while in flight");
            }
        }
        result
    }

    /// Returns the cached value without fetching.
    pub async fn peek(&self, key: &K) -> Option<V> {
        self.entries.get(key).await
    }

    /// Evicts every entry providing a tag covered by `tags` and notifies
    /// its subscribers. Returns the evicted keys.
    pub async fn invalidate(&self, tags: &[QueryTag]) -> Vec<K> {
        let keys = self.lock_index().matching(tags);
        for key in &keys {
            self.bump(key);
            self.entries.invalidate(key).await;
        }
        debug!(?tags, evicted = keys.len(), "cache invalidated");
        keys
    }

    /// Discards every entry and notifies all subscribers.
    pub fn reset(&self) {
        let tracked = self.lock_index().keys().len();
        for sender in self.lock_generations().values() {
            sender.send_modify(|generation| *generation = generation.wrapping_add(1));
        }
        self.entries.invalidate_all();
        self.lock_index().clear();
        debug!(tracked, "cache reset");
    }

    /// Subscribes to invalidations of `key`.
    ///
    /// The receiver observes a change each time the key is invalidated or
    /// the cache is reset.
    #[must_use]
    pub fn subscribe(&self, key: &K) -> watch::Receiver<u64> {
        self.lock_generations()
            .entry(key.clone())
            .or_insert_with(|| watch::channel(0).0)
            .subscribe()
    }

    fn track(&self, key: &K) {
        self.lock_index().register(key, &key.provides());
    }

    fn generation(&self, key: &K) -> u64 {
        let mut generations = self.lock_generations();
        let sender = generations
            .entry(key.clone())
            .or_insert_with(|| watch::channel(0).0);
        let current = *sender.borrow();
        current
    }

    fn bump(&self, key: &K) {
        if let Some(sender) = self.lock_generations().get(key) {
            sender.send_modify(|generation| *generation = generation.wrapping_add(1));
        }
    }

    fn lock_index(&self) -> MutexGuard<'_, TagIndex<K>> {
        self.index.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_generations(&self) -> MutexGuard<'_, HashMap<K, watch::Sender<u64>>> {
        self.generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

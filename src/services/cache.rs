use serde::Serialize;
use serde::de::DeserializeOwned;

use std::collections::HashMap;
use std::sync::Mutex;

/// A cache entry label: the operation name plus its parameters. Invalidating
/// a key forces the next read through that key to hit the database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The "list all posts" result set.
    Posts,
    /// A single post by id.
    Post(i64),
    /// One user's posts with aggregated counts.
    UserPosts(i64),
}

/// Keyed in-memory cache for query results, stored as serialized JSON
/// values so heterogeneous result shapes share one map.
///
/// There is no TTL and no at-most-one-in-flight coordination: concurrent
/// readers of a missing key each fetch independently and the last write
/// wins, matching the synchronization contract of the screens it backs.
pub struct QueryCache {
    entries: Mutex<HashMap<CacheKey, serde_json::Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        entries
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn put<T: Serialize>(&self, key: CacheKey, value: &T) {
        let Ok(serialized) = serde_json::to_value(value) else {
            return;
        };

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        entries.insert(key, serialized);
    }

    pub fn invalidate(&self, key: &CacheKey) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        entries.remove(key);
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        entries.contains_key(key)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

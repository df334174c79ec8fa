//! Cache storage for the messages namespace.
//!
//! Two compartments behind one invalidation boundary: the all-messages list
//! (a singleton entry) and a per-id LRU cache. `invalidate_all` clears both;
//! nothing else may leave a stale entry behind after a write.

use std::sync::RwLock;

use lru::LruCache;
use metrics::counter;

use crate::domain::entities::MessageRecord;

use super::config::CacheConfig;
use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::store";

const METRIC_CACHE_HIT: &str = "bacheca_cache_hit_total";
const METRIC_CACHE_MISS: &str = "bacheca_cache_miss_total";
const METRIC_CACHE_EVICT: &str = "bacheca_cache_evict_total";
const METRIC_CACHE_INVALIDATE: &str = "bacheca_cache_invalidate_total";

/// In-memory cache for message records.
///
/// The list entry and the per-id entries are disjoint: populating one never
/// touches the other, and a per-id hit is possible while the list entry is
/// empty (and vice versa).
pub struct MessageCache {
    // Singleton all-messages entry (no eviction needed)
    list: RwLock<Option<Vec<MessageRecord>>>,

    // Per-id cache with LRU eviction
    by_id: RwLock<LruCache<i64, MessageRecord>>,
}

impl MessageCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            list: RwLock::new(None),
            by_id: RwLock::new(LruCache::new(config.message_limit_non_zero())),
        }
    }

    // ========================================================================
    // All-messages entry
    // ========================================================================

    pub fn get_list(&self) -> Option<Vec<MessageRecord>> {
        let cached = rw_read(&self.list, SOURCE, "get_list").clone();
        match cached {
            Some(list) => {
                counter!(METRIC_CACHE_HIT).increment(1);
                Some(list)
            }
            None => {
                counter!(METRIC_CACHE_MISS).increment(1);
                None
            }
        }
    }

    pub fn set_list(&self, messages: Vec<MessageRecord>) {
        *rw_write(&self.list, SOURCE, "set_list") = Some(messages);
    }

    pub fn invalidate_list(&self) {
        *rw_write(&self.list, SOURCE, "invalidate_list") = None;
    }

    // ========================================================================
    // Per-id cache
    // ========================================================================

    pub fn get_by_id(&self, id: i64) -> Option<MessageRecord> {
        let cached = rw_write(&self.by_id, SOURCE, "get_by_id")
            .get(&id)
            .cloned();
        match cached {
            Some(record) => {
                counter!(METRIC_CACHE_HIT).increment(1);
                Some(record)
            }
            None => {
                counter!(METRIC_CACHE_MISS).increment(1);
                None
            }
        }
    }

    pub fn set_message(&self, message: MessageRecord) {
        let id = message.id;
        let displaced = rw_write(&self.by_id, SOURCE, "set_message").push(id, message);
        if let Some((displaced_id, _)) = displaced {
            // push returns the previous value on same-key replacement; only a
            // different key means a capacity eviction.
            if displaced_id != id {
                counter!(METRIC_CACHE_EVICT).increment(1);
            }
        }
    }

    pub fn invalidate_message(&self, id: i64) {
        rw_write(&self.by_id, SOURCE, "invalidate_message").pop(&id);
    }

    // ========================================================================
    // Namespace-wide eviction
    // ========================================================================

    /// Clear every entry in the messages namespace: the list entry and all
    /// per-id entries. Subsequent gets of any kind miss.
    pub fn invalidate_all(&self) {
        counter!(METRIC_CACHE_INVALIDATE).increment(1);
        self.invalidate_list();
        rw_write(&self.by_id, SOURCE, "invalidate_all.by_id").clear();
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use time::OffsetDateTime;

    use super::*;

    fn sample_message(id: i64, content: &str) -> MessageRecord {
        MessageRecord {
            id,
            content: content.to_string(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn per_id_cache_roundtrip() {
        let config = CacheConfig::default();
        let cache = MessageCache::new(&config);

        assert!(cache.get_by_id(1).is_none());

        cache.set_message(sample_message(1, "first"));

        let cached = cache.get_by_id(1).expect("cached message");
        assert_eq!(cached.content, "first");

        cache.invalidate_message(1);
        assert!(cache.get_by_id(1).is_none());
    }

    #[test]
    fn list_entry_roundtrip() {
        let config = CacheConfig::default();
        let cache = MessageCache::new(&config);

        assert!(cache.get_list().is_none());

        cache.set_list(vec![sample_message(1, "first"), sample_message(2, "second")]);

        let cached = cache.get_list().expect("cached list");
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].content, "first");

        cache.invalidate_list();
        assert!(cache.get_list().is_none());
    }

    #[test]
    fn list_and_per_id_entries_are_disjoint() {
        let config = CacheConfig::default();
        let cache = MessageCache::new(&config);

        cache.set_list(vec![sample_message(1, "first")]);

        // Populating the list never seeds per-id entries.
        assert!(cache.get_by_id(1).is_none());

        cache.set_message(sample_message(2, "second"));
        cache.invalidate_list();

        // Dropping the list entry leaves per-id entries alone.
        assert!(cache.get_by_id(2).is_some());
    }

    #[test]
    fn per_id_lru_eviction() {
        let config = CacheConfig {
            message_limit: 2,
            ..Default::default()
        };
        let cache = MessageCache::new(&config);

        cache.set_message(sample_message(1, "one"));
        cache.set_message(sample_message(2, "two"));

        assert!(cache.get_by_id(1).is_some());
        assert!(cache.get_by_id(2).is_some());

        // Adding a third evicts the least recently used entry.
        cache.set_message(sample_message(3, "three"));

        assert!(cache.get_by_id(1).is_none());
        assert!(cache.get_by_id(2).is_some());
        assert!(cache.get_by_id(3).is_some());
    }

    #[test]
    fn invalidate_all_clears_both_compartments() {
        let config = CacheConfig::default();
        let cache = MessageCache::new(&config);

        cache.set_list(vec![sample_message(1, "first")]);
        cache.set_message(sample_message(1, "first"));
        cache.set_message(sample_message(2, "second"));

        cache.invalidate_all();

        assert!(cache.get_list().is_none());
        assert!(cache.get_by_id(1).is_none());
        assert!(cache.get_by_id(2).is_none());
    }

    #[test]
    fn recovers_from_poisoned_lock() {
        let config = CacheConfig::default();
        let cache = MessageCache::new(&config);

        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = cache.list.write().expect("list lock should be acquired");
            panic!("poison list lock");
        }));

        cache.set_list(vec![sample_message(1, "first")]);
        assert!(cache.get_list().is_some());
    }
}

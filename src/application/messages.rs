//! Message service: cache-aside reads, write-through invalidation.
//!
//! The one correctness property in the system lives here: after any
//! successful create, no subsequent read may return cache content older than
//! that create. Eviction is unconditional and namespace-wide, and
//! `create_message` does not return until it has happened.

use std::sync::Arc;

use crate::cache::MessageCache;
use crate::domain::entities::MessageRecord;

use super::repos::{MessagesRepo, RepoError};

/// Orchestrates the messages cache and the backing store.
///
/// Collaborators arrive through the constructor so tests can substitute
/// fakes. When the cache handle is `None` (cache disabled in configuration)
/// every call goes straight to the store.
pub struct MessageService {
    repo: Arc<dyn MessagesRepo>,
    cache: Option<Arc<MessageCache>>,
}

impl MessageService {
    pub fn new(repo: Arc<dyn MessagesRepo>, cache: Option<Arc<MessageCache>>) -> Self {
        Self { repo, cache }
    }

    /// Return all messages in insertion order.
    ///
    /// The result is cached under the fixed all-messages entry: populated on
    /// the first call after any invalidation, served from memory thereafter.
    pub async fn list_messages(&self) -> Result<Vec<MessageRecord>, RepoError> {
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get_list() {
                return Ok(cached);
            }
            let messages = self.repo.find_all().await?;
            cache.set_list(messages.clone());
            Ok(messages)
        } else {
            self.repo.find_all().await
        }
    }

    /// Look up a single message by id.
    ///
    /// Each id caches under its own key, disjoint from the list entry.
    /// Misses are not cached; only found rows populate the per-id cache.
    pub async fn get_message(&self, id: i64) -> Result<Option<MessageRecord>, RepoError> {
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get_by_id(id) {
                return Ok(Some(cached));
            }
            let found = self.repo.find_by_id(id).await?;
            if let Some(record) = &found {
                cache.set_message(record.clone());
            }
            Ok(found)
        } else {
            self.repo.find_by_id(id).await
        }
    }

    /// Insert a new message and evict the entire messages cache namespace.
    ///
    /// The evict covers the list entry and every per-id entry, including ids
    /// unrelated to the new row, and it completes before this method returns.
    /// Coarse, but no stale entry can survive a write.
    pub async fn create_message(&self, content: String) -> Result<MessageRecord, RepoError> {
        let created = self.repo.insert(&content).await?;
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
        Ok(created)
    }
}

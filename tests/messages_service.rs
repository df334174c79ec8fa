use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::Mutex;

use bacheca::application::messages::MessageService;
use bacheca::application::repos::{MessagesRepo, RepoError};
use bacheca::cache::{CacheConfig, MessageCache};
use bacheca::domain::entities::MessageRecord;

/// In-memory store that counts how often each operation reaches it, so tests
/// can tell a cache hit from a fresh load.
#[derive(Default)]
struct CountingRepo {
    rows: Mutex<Vec<MessageRecord>>,
    find_all_calls: AtomicUsize,
    find_by_id_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

#[async_trait]
impl MessagesRepo for CountingRepo {
    async fn find_all(&self) -> Result<Vec<MessageRecord>, RepoError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MessageRecord>, RepoError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .find(|message| message.id == id)
            .cloned())
    }

    async fn insert(&self, content: &str) -> Result<MessageRecord, RepoError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().await;
        let record = MessageRecord {
            id: rows.len() as i64 + 1,
            content: content.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        rows.push(record.clone());
        Ok(record)
    }
}

fn cached_service(repo: Arc<CountingRepo>) -> MessageService {
    let cache = Arc::new(MessageCache::new(&CacheConfig::default()));
    MessageService::new(repo, Some(cache))
}

#[tokio::test]
async fn list_is_served_from_cache_after_first_load() {
    let repo = Arc::new(CountingRepo::default());
    repo.insert("first").await.expect("seed row");
    let service = cached_service(repo.clone());

    let first = service.list_messages().await.expect("first list");
    let second = service.list_messages().await.expect("second list");

    assert_eq!(first, second);
    assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn create_makes_the_next_list_fresh() {
    let repo = Arc::new(CountingRepo::default());
    let service = cached_service(repo.clone());

    service.list_messages().await.expect("prime list cache");
    let created = service
        .create_message("appears immediately".to_string())
        .await
        .expect("create");

    let listed = service.list_messages().await.expect("list after create");

    assert!(listed.iter().any(|m| m.id == created.id));
    assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn get_by_id_is_cached_per_id() {
    let repo = Arc::new(CountingRepo::default());
    repo.insert("cached row").await.expect("seed row");
    let service = cached_service(repo.clone());

    let first = service.get_message(1).await.expect("first get");
    let second = service.get_message(1).await.expect("second get");

    assert_eq!(first, second);
    assert!(first.is_some());
    assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn distinct_ids_cache_under_distinct_entries() {
    let repo = Arc::new(CountingRepo::default());
    repo.insert("one").await.expect("seed row");
    repo.insert("two").await.expect("seed row");
    let service = cached_service(repo.clone());

    service.get_message(1).await.expect("get 1");
    service.get_message(2).await.expect("get 2");
    service.get_message(1).await.expect("get 1 again");
    service.get_message(2).await.expect("get 2 again");

    assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn create_evicts_per_id_entries_for_unrelated_ids() {
    let repo = Arc::new(CountingRepo::default());
    repo.insert("already there").await.expect("seed row");
    let service = cached_service(repo.clone());

    service.get_message(1).await.expect("prime per-id cache");
    service
        .create_message("unrelated new row".to_string())
        .await
        .expect("create");
    service.get_message(1).await.expect("get after create");

    // The second get must reload: the create evicted the whole namespace.
    assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn missing_id_is_not_cached() {
    let repo = Arc::new(CountingRepo::default());
    let service = cached_service(repo.clone());

    assert!(service.get_message(99).await.expect("first get").is_none());
    assert!(service.get_message(99).await.expect("second get").is_none());

    assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn disabled_cache_reads_pass_through() {
    let repo = Arc::new(CountingRepo::default());
    let service = MessageService::new(repo.clone(), None);

    service.list_messages().await.expect("first list");
    service.list_messages().await.expect("second list");
    service
        .create_message("no cache to evict".to_string())
        .await
        .expect("create");

    assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 2);
    assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn interleaved_reads_and_writes_stay_fresh() {
    let repo = Arc::new(CountingRepo::default());
    let service = cached_service(repo.clone());

    let first = service
        .create_message("first".to_string())
        .await
        .expect("create first");
    let second = service
        .create_message("second".to_string())
        .await
        .expect("create second");

    let listed = service.list_messages().await.expect("list both");
    assert_eq!(
        listed.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let fetched = service
        .get_message(second.id)
        .await
        .expect("get second")
        .expect("second exists");
    assert_eq!(fetched.content, "second");

    let third = service
        .create_message("third".to_string())
        .await
        .expect("create third");
    assert!(third.created_at >= second.created_at);

    let listed = service.list_messages().await.expect("list all three");
    assert_eq!(
        listed.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![first.id, second.id, third.id]
    );
}

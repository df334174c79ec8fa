//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::OffsetDateTime;

/// A stored message. The store assigns `id` and `created_at` on insert;
/// `content` never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    pub id: i64,
    pub content: String,
    pub created_at: OffsetDateTime,
}

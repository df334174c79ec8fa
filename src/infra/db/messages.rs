use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    application::repos::{MessagesRepo, RepoError},
    domain::entities::MessageRecord,
};

use super::{PostgresRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    content: String,
    created_at: OffsetDateTime,
}

impl From<MessageRow> for MessageRecord {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MessagesRepo for PostgresRepositories {
    async fn find_all(&self) -> Result<Vec<MessageRecord>, RepoError> {
        // Ordered by the primary key so "insertion order" does not depend on
        // heap layout.
        let rows: Vec<MessageRow> = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, content, created_at
            FROM messages
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(MessageRecord::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MessageRecord>, RepoError> {
        let row: Option<MessageRow> = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, content, created_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(MessageRecord::from))
    }

    async fn insert(&self, content: &str) -> Result<MessageRecord, RepoError> {
        let row: MessageRow = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (content)
            VALUES ($1)
            RETURNING id, content, created_at
            "#,
        )
        .bind(content)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(MessageRecord::from(row))
    }
}

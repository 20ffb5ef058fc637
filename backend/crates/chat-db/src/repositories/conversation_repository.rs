use crate::repositories::{parse_millis, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use chat_core::{ConversationRecord, Exchange};

use chrono::Utc;
use log::debug;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ConversationRow {
    id: String,
    identity_id: String,
    created_at: i64,
    updated_at: i64,
}

#[derive(FromRow)]
struct ExchangeRow {
    id: String,
    question: String,
    answer: String,
    created_at: i64,
}

impl TryFrom<ExchangeRow> for Exchange {
    type Error = DbError;

    fn try_from(row: ExchangeRow) -> DbErrorResult<Self> {
        Ok(Exchange {
            id: parse_uuid("exchanges", &row.id)?,
            question: row.question,
            answer: row.answer,
            timestamp: parse_millis("exchanges", row.created_at)?,
        })
    }
}

/// Per-identity conversation storage.
///
/// Each identity owns at most one conversation row, enforced by
/// `UNIQUE(identity_id)`. The row is created by the first `append`.
/// Exchanges are returned in `seq` order, which is the order the store
/// accepted them.
pub struct ConversationRepository {
    pool: SqlitePool,
}

impl ConversationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The identity's record with its exchanges, or None if it never appended
    pub async fn find_by_identity(
        &self,
        identity_id: Uuid,
    ) -> DbErrorResult<Option<ConversationRecord>> {
        let row = sqlx::query_as::<_, ConversationRow>(
            r#"
              SELECT id, identity_id, created_at, updated_at
              FROM conversations
              WHERE identity_id = ?
              "#,
        )
        .bind(identity_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let exchanges = sqlx::query_as::<_, ExchangeRow>(
            r#"
              SELECT id, question, answer, created_at
              FROM exchanges
              WHERE conversation_id = ?
              ORDER BY seq ASC
              "#,
        )
        .bind(&row.id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Exchange::try_from)
        .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(Some(ConversationRecord {
            id: parse_uuid("conversations", &row.id)?,
            identity_id: parse_uuid("conversations", &row.identity_id)?,
            exchanges,
            created_at: parse_millis("conversations", row.created_at)?,
            updated_at: parse_millis("conversations", row.updated_at)?,
        }))
    }

    /// Append an exchange, creating the identity's record if needed.
    ///
    /// The upsert and the insert share one transaction, so concurrent first
    /// appends for the same identity end up in a single record.
    /// Returns the record id.
    pub async fn append(&self, identity_id: Uuid, exchange: &Exchange) -> DbErrorResult<Uuid> {
        let now = Utc::now().timestamp_millis();
        let mut tx = self.pool.begin().await?;

        let conversation_id: String = sqlx::query_scalar(
            r#"
              INSERT INTO conversations (id, identity_id, created_at, updated_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(identity_id) DO UPDATE SET updated_at = excluded.updated_at
              RETURNING id
              "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(identity_id.to_string())
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
              INSERT INTO exchanges (id, conversation_id, question, answer, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(exchange.id.to_string())
        .bind(&conversation_id)
        .bind(&exchange.question)
        .bind(&exchange.answer)
        .bind(exchange.timestamp.timestamp_millis())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            "Appended exchange {} to conversation {}",
            exchange.id, conversation_id
        );

        parse_uuid("conversations", &conversation_id)
    }

    /// Drop every exchange of the identity's record. The record itself stays.
    /// Idempotent; returns the number of exchanges removed.
    pub async fn clear(&self, identity_id: Uuid) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(
            r#"
              DELETE FROM exchanges
              WHERE conversation_id IN (
                  SELECT id FROM conversations WHERE identity_id = ?
              )
              "#,
        )
        .bind(identity_id.to_string())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("UPDATE conversations SET updated_at = ? WHERE identity_id = ?")
            .bind(Utc::now().timestamp_millis())
            .bind(identity_id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(removed)
    }
}

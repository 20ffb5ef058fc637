use crate::repositories::{parse_millis, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use chat_core::{ErrorLocation, Identity};

use std::panic::Location;

use chrono::Utc;
use log::debug;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "identities";

#[derive(FromRow)]
struct IdentityRow {
    id: String,
    email: String,
    name: Option<String>,
    password_hash: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = DbError;

    fn try_from(row: IdentityRow) -> DbErrorResult<Self> {
        Ok(Identity {
            id: parse_uuid(TABLE, &row.id)?,
            email: row.email,
            name: row.name,
            password_hash: row.password_hash,
            created_at: parse_millis(TABLE, row.created_at)?,
            updated_at: parse_millis(TABLE, row.updated_at)?,
        })
    }
}

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity. A taken email is `DuplicateEmail`.
    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
              INSERT INTO identities (id, email, name, password_hash, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.email)
        .bind(&identity.name)
        .bind(&identity.password_hash)
        .bind(identity.created_at.timestamp_millis())
        .bind(identity.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!("Created identity {}", identity.id);
                Ok(())
            }
            Err(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => {
                Err(DbError::DuplicateEmail {
                    email: identity.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, email, name, password_hash, created_at, updated_at
              FROM identities
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    /// Lookup by email. Callers pass the normalized (lowercased) address.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, email, name, password_hash, created_at, updated_at
              FROM identities
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    /// Set or clear the display name. Returns false when the identity is gone.
    pub async fn update_name(&self, id: Uuid, name: Option<&str>) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE identities
              SET name = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(name)
        .bind(Utc::now().timestamp_millis())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove the identity. Its conversation record is left in place.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM identities WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

use crate::{ConversationRepository, DbError, IdentityRepository, MIGRATOR};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

#[tokio::test]
async fn given_identity_row_with_bad_id_when_loaded_then_corrupt_row_error() {
    let pool = setup_pool().await;
    sqlx::query(
        "INSERT INTO identities (id, email, name, password_hash, created_at, updated_at)
         VALUES ('not-a-uuid', 'ada@example.com', NULL, 'x', 0, 0)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = IdentityRepository::new(pool)
        .find_by_email("ada@example.com")
        .await;

    assert!(matches!(
        result,
        Err(DbError::CorruptRow { table: "identities", .. })
    ));
}

#[tokio::test]
async fn given_exchange_row_with_bad_id_when_listed_then_corrupt_row_error() {
    let pool = setup_pool().await;
    let identity_id = Uuid::new_v4();
    let conversation_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO conversations (id, identity_id, created_at, updated_at) VALUES (?, ?, 0, 0)",
    )
    .bind(conversation_id.to_string())
    .bind(identity_id.to_string())
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO exchanges (id, conversation_id, question, answer, created_at)
         VALUES ('garbage', ?, 'q', 'a', 0)",
    )
    .bind(conversation_id.to_string())
    .execute(&pool)
    .await
    .unwrap();

    let result = ConversationRepository::new(pool)
        .find_by_identity(identity_id)
        .await;

    assert!(matches!(
        result,
        Err(DbError::CorruptRow { table: "exchanges", .. })
    ));
}

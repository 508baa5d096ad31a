use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// User row. The password column stores an argon2 hash, never the
/// plaintext. The register response serializes the full row, hash
/// included, matching the existing wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

impl User {
    pub async fn find_by_username(db: &PgPool, username: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &PgPool, username: &str, password_hash: &str) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}

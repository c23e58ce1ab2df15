use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub const ROLE_MEMBER: &str = "member";
pub const ROLE_ADMIN: &str = "admin";

/// Account row - SQL persistence layer
///
/// Holds credentials and the stored role; never leaves the server unredacted
/// (GraphQL sees the projection built in the schema layer).
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Find account by email (emails are stored lowercased)
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new account
    pub async fn insert(email: &str, password_hash: &str, role: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (id, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

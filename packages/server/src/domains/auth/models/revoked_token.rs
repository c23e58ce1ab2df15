use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Sign-out revocation list entry, keyed by JWT jti.
///
/// A token whose jti appears here no longer authenticates, even though it
/// would still verify cryptographically until its expiry.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct RevokedToken {
    pub jti: Uuid,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Revoke a token. Revoking twice is a no-op.
    pub async fn revoke(jti: Uuid, expires_at: DateTime<Utc>, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "INSERT INTO revoked_tokens (jti, expires_at)
             VALUES ($1, $2)
             ON CONFLICT (jti) DO NOTHING",
        )
        .bind(jti)
        .bind(expires_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Check whether a token has been revoked.
    pub async fn is_revoked(jti: Uuid, pool: &PgPool) -> Result<bool> {
        let found: Option<(Uuid,)> =
            sqlx::query_as("SELECT jti FROM revoked_tokens WHERE jti = $1")
                .bind(jti)
                .fetch_optional(pool)
                .await?;

        Ok(found.is_some())
    }

    /// Drop entries for tokens that have expired on their own.
    pub async fn prune_expired(pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < NOW()")
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

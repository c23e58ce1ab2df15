//! Sign-out action

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::domains::auth::models::RevokedToken;

/// Revoke the presented token so it no longer authenticates.
///
/// The expiry is recorded alongside the jti so the revocation row can be
/// pruned once the token would have lapsed anyway.
pub async fn sign_out(
    user_id: Uuid,
    jti: Uuid,
    expires_at: DateTime<Utc>,
    pool: &PgPool,
) -> Result<()> {
    RevokedToken::revoke(jti, expires_at, pool).await?;
    info!(user_id = %user_id, jti = %jti, "Signed out, token revoked");
    Ok(())
}

//! Sign-in action

use anyhow::{bail, Result};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::domains::auth::actions::AuthSession;
use crate::domains::auth::models::User;
use crate::domains::auth::password::verify_password;
use crate::domains::auth::JwtService;

/// Verify credentials and issue a session token.
///
/// Unknown email and wrong password produce the same error, so the endpoint
/// cannot be used to enumerate accounts.
pub async fn sign_in(
    email: &str,
    password: &str,
    jwt_service: &JwtService,
    pool: &PgPool,
) -> Result<AuthSession> {
    let email = email.trim().to_lowercase();

    let user = match User::find_by_email(&email, pool).await? {
        Some(user) => user,
        None => {
            warn!(email = %email, "Sign-in failed: unknown email");
            bail!("Invalid email or password");
        }
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(user_id = %user.id, "Sign-in failed: wrong password");
        bail!("Invalid email or password");
    }

    info!(user_id = %user.id, "Signed in");

    let token = jwt_service.create_token(user.id, user.email.clone(), user.is_admin())?;

    Ok(AuthSession { token, user })
}

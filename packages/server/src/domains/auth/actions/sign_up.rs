//! Sign-up action

use anyhow::{bail, Result};
use sqlx::PgPool;
use tracing::info;

use crate::domains::auth::actions::AuthSession;
use crate::domains::auth::models::user::{ROLE_ADMIN, ROLE_MEMBER};
use crate::domains::auth::models::User;
use crate::domains::auth::password::hash_password;
use crate::domains::auth::JwtService;

const MIN_PASSWORD_LEN: usize = 8;

/// New-account request, as it arrives from the registration form.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    /// The registrant asked to be listed on the map (paid tier). Listing is
    /// granted by staff creating/linking a member row, not by this flag.
    pub wants_listing: bool,
}

/// Create an account and issue its first session token.
///
/// Emails on the configured admin list sign up with the admin role.
pub async fn sign_up(
    request: SignUpRequest,
    admin_emails: &[String],
    jwt_service: &JwtService,
    pool: &PgPool,
) -> Result<AuthSession> {
    let email = request.email.trim().to_lowercase();

    if !email.contains('@') {
        bail!("A valid email address is required");
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        bail!("Password must be at least {} characters", MIN_PASSWORD_LEN);
    }
    if User::find_by_email(&email, pool).await?.is_some() {
        bail!("An account with this email already exists");
    }

    let role = if admin_emails.iter().any(|a| a == &email) {
        ROLE_ADMIN
    } else {
        ROLE_MEMBER
    };

    let password_hash = hash_password(&request.password)?;
    let user = User::insert(&email, &password_hash, role, pool).await?;

    info!(
        user_id = %user.id,
        role = %user.role,
        wants_listing = request.wants_listing,
        "Account created"
    );

    let token = jwt_service.create_token(user.id, user.email.clone(), user.is_admin())?;

    Ok(AuthSession { token, user })
}

use sqlx::PgPool;
use std::sync::Arc;
use tracing::warn;

use crate::common::visibility::Viewer;
use crate::domains::auth::{AuthError, JwtService};
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Shared resources plus the per-request authentication state populated by
/// the JWT middleware.
#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
    pub auth_user: Option<AuthUser>,
    pub jwt_service: Arc<JwtService>,
    /// Sign-ups matching these emails get the admin role.
    pub admin_emails: Vec<String>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(
        db_pool: PgPool,
        auth_user: Option<AuthUser>,
        jwt_service: Arc<JwtService>,
        admin_emails: Vec<String>,
    ) -> Self {
        Self {
            db_pool,
            auth_user,
            jwt_service,
            admin_emails,
        }
    }

    /// The caller's authentication state, for the visibility policy.
    pub fn viewer(&self) -> Viewer {
        match &self.auth_user {
            None => Viewer::Anonymous,
            Some(user) if user.is_admin => Viewer::Admin,
            Some(_) => Viewer::Member,
        }
    }

    /// Require a signed-in caller. The denial is logged, not swallowed.
    pub fn require_auth(&self) -> Result<&AuthUser, AuthError> {
        match &self.auth_user {
            Some(user) => Ok(user),
            None => {
                warn!("Authorization denial: unauthenticated request to protected field");
                Err(AuthError::AuthenticationRequired)
            }
        }
    }

    /// Require an admin caller. The denial is logged, not swallowed.
    pub fn require_admin(&self) -> Result<&AuthUser, AuthError> {
        let user = self.require_auth()?;
        if !user.is_admin {
            warn!(user_id = %user.user_id, "Authorization denial: non-admin reached admin field");
            return Err(AuthError::AdminRequired);
        }
        Ok(user)
    }
}

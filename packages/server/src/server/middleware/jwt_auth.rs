use axum::{middleware::Next, response::Response};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domains::auth::models::RevokedToken;
use crate::domains::auth::{Claims, JwtService};

/// Authenticated account information from the JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub is_admin: bool,
    /// Token id, needed for sign-out revocation.
    pub jti: Uuid,
    /// Token expiry, recorded with the revocation.
    pub expires_at: DateTime<Utc>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        let expires_at = claims.expires_at();
        Self {
            user_id: claims.user_id,
            email: claims.email,
            is_admin: claims.is_admin,
            jti: claims.jti,
            expires_at,
        }
    }
}

/// JWT authentication middleware
///
/// Extracts the bearer token, verifies it, checks the revocation list, and
/// adds AuthUser to request extensions. A missing, invalid, or revoked token
/// degrades the request to anonymous (public directory still works); it
/// never fails the whole request here.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    pool: PgPool,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(claims) = extract_claims(&request, &jwt_service) {
        match RevokedToken::is_revoked(claims.jti, &pool).await {
            Ok(true) => {
                debug!(user_id = %claims.user_id, "Revoked token presented; treating as anonymous");
            }
            Ok(false) => {
                let user = AuthUser::from(claims);
                debug!(
                    "Authenticated user: {} (admin: {})",
                    user.user_id, user.is_admin
                );
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                warn!(error = %e, "Revocation check failed; treating request as anonymous");
            }
        }
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify the JWT from the request
fn extract_claims(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<Claims> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Handle both "Bearer <token>" and raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    jwt_service.verify_token(token).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test_secret", "test_issuer".to_string())
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = service();
        let user_id = Uuid::new_v4();
        let token = jwt_service
            .create_token(user_id, "a@example.com".to_string(), true)
            .unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let claims = extract_claims(&request, &jwt_service);
        assert_eq!(claims.unwrap().user_id, user_id);
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt_service = service();
        let user_id = Uuid::new_v4();
        let token = jwt_service
            .create_token(user_id, "a@example.com".to_string(), false)
            .unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", token)
            .body(axum::body::Body::empty())
            .unwrap();

        let claims = extract_claims(&request, &jwt_service);
        assert_eq!(claims.unwrap().user_id, user_id);
    }

    #[test]
    fn test_no_auth_header() {
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_claims(&request, &service()).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let request = axum::http::Request::builder()
            .header("authorization", "Bearer invalid_token")
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_claims(&request, &service()).is_none());
    }
}

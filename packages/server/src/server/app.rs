//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::auth::{JwtService, RevokedToken};
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{jwt_auth_middleware, AuthUser};
use crate::server::routes::{
    graphql_batch_handler, graphql_handler, graphql_playground, health_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
    pub admin_emails: Vec<String>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Auth state was populated by jwt_auth_middleware, if a valid token came in
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(
        state.db_pool.clone(),
        auth_user,
        state.jwt_service.clone(),
        state.admin_emails.clone(),
    );

    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));

    let app_state = AxumAppState {
        db_pool: pool.clone(),
        jwt_service: jwt_service.clone(),
        admin_emails: config.admin_emails.clone(),
    };

    // Prune lapsed revocation rows hourly as a background task
    let pool_for_pruner = pool.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(3600));
        loop {
            ticker.tick().await;
            match RevokedToken::prune_expired(&pool_for_pruner).await {
                Ok(0) => {}
                Ok(n) => tracing::debug!(pruned = n, "Pruned expired token revocations"),
                Err(e) => tracing::error!(error = %e, "Failed to prune token revocations"),
            }
        }
    });

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting: 10 requests per second per IP with bursts of 20
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .use_headers() // Extract IP from X-Forwarded-For header
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    // Clone for middleware closures
    let jwt_service_for_middleware = jwt_service.clone();
    let pool_for_middleware = pool.clone();

    // Build router
    let mut router = Router::new()
        // GraphQL endpoints with rate limiting
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(
                jwt_service_for_middleware.clone(),
                pool_for_middleware.clone(),
                req,
                next,
            )
        }))
        .layer(rate_limit_layer)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema)
}

//! Auth actions
//!
//! Called directly from GraphQL resolvers; auth checks for sign-out are done
//! at the GraphQL layer.

pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

pub use sign_in::sign_in;
pub use sign_out::sign_out;
pub use sign_up::{sign_up, SignUpRequest};

use crate::domains::auth::models::User;

/// An issued session: the bearer token plus the account it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

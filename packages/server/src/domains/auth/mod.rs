//! Auth domain - email/password identity and JWT sessions
//!
//! Implements the session layer the map and admin clients sit on top of:
//! credential storage (argon2id), token issuance/verification, and a jti
//! revocation list so sign-out actually invalidates the token server-side.

pub mod actions;
pub mod error;
pub mod jwt;
pub mod models;
pub mod password;

pub use error::AuthError;
pub use jwt::{Claims, JwtService};
pub use models::{RevokedToken, User};

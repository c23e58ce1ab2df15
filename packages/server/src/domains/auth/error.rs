use thiserror::Error;

/// Authorization errors surfaced to GraphQL callers
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unauthenticated: Valid JWT required")]
    AuthenticationRequired,

    #[error("Unauthorized: Admin access required")]
    AdminRequired,
}

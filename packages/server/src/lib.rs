// MemberMap - API Core
//
// Backend API for the branch/member directory map: authenticated identity,
// disclosure-level visibility filtering, member self-service, and the admin
// moderation console. Clients (web map, admin dashboard) talk GraphQL.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;

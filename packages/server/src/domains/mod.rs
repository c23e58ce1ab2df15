// Business domains
pub mod auth;
pub mod branch;
pub mod member;

//! Branch query actions
//!
//! Query actions return data directly. Auth checks are done at the GraphQL
//! layer.

pub mod queries;

pub use queries::{admin_branches, public_branches};

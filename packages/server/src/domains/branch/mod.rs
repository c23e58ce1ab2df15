//! Branch domain - regional branches shown on the map
//!
//! Branch rows are imported by operator tooling; the API only reads them.

pub mod actions;
pub mod data;
pub mod models;

pub use data::BranchData;
pub use models::Branch;

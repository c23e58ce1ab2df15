//! Member actions
//!
//! Query actions return data directly. Auth checks are done at the GraphQL
//! layer; the directory query additionally runs through the visibility
//! policy here, so a resolver cannot forget it.

pub mod moderate;
pub mod queries;
pub mod update_profile;

pub use moderate::{assign_member_user, toggle_member_visibility};
pub use queries::{admin_members_paginated, directory_members, own_profile};
pub use update_profile::update_own_profile;

//! Member domain - directory listings, profile self-service, moderation
//!
//! Every read goes through the visibility policy in `common::visibility`
//! except the dedicated admin listing, which is the one unredacted path.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{AdminMemberData, MemberCard, ProfileData};
pub use models::member::Member;

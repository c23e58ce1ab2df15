pub mod member;

pub use member::{Member, MemberStats, ProfilePatch};

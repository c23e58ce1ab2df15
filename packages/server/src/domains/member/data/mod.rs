pub mod member;

pub use member::{AdminMemberData, MemberCard, MemberConnection, MemberEdge, ProfileData};

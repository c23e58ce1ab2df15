//! Member GraphQL data types
//!
//! Three projections of the same row, by audience:
//!
//! - [`MemberCard`] - what the directory map shows; no billing, moderation,
//!   or ownership columns, ever.
//! - [`ProfileData`] - the owner's view of their own row; adds the
//!   disclosure controls and payment status (read-only).
//! - [`AdminMemberData`] - the moderation table; the only unredacted view.

use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use uuid::Uuid;

use crate::common::pagination::PageInfo;
use crate::domains::member::models::member::Member as MemberModel;

/// Directory map entry
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A member pin on the directory map")]
pub struct MemberCard {
    /// Unique identifier
    pub id: Uuid,

    /// Name shown on the marker popup
    pub display_name: String,

    /// Company name, if the member lists one
    pub company_name: Option<String>,

    /// Primary industry tag
    pub industry_1: Option<String>,

    /// Secondary industry tag
    pub industry_2: Option<String>,

    /// Introductions the member is looking for
    pub want_to_introduce: Option<String>,

    /// Introductions the member can make
    pub can_introduce: Option<String>,

    /// Marker latitude (decimal degrees)
    pub latitude: f64,

    /// Marker longitude (decimal degrees)
    pub longitude: f64,
}

impl From<MemberModel> for MemberCard {
    fn from(member: MemberModel) -> Self {
        Self {
            id: member.id,
            display_name: member.display_name,
            company_name: member.company_name,
            industry_1: member.industry_1,
            industry_2: member.industry_2,
            want_to_introduce: member.want_to_introduce,
            can_introduce: member.can_introduce,
            latitude: member.latitude,
            longitude: member.longitude,
        }
    }
}

/// The caller's own member row, for the profile screen
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "The signed-in member's own profile")]
pub struct ProfileData {
    pub id: Uuid,
    pub display_name: String,
    pub company_name: Option<String>,
    pub industry_1: Option<String>,
    pub industry_2: Option<String>,
    pub want_to_introduce: Option<String>,
    pub can_introduce: Option<String>,
    pub latitude: f64,
    pub longitude: f64,

    /// Listed in the directory at all
    pub visible: bool,

    /// Opted into the anonymous (level 1) map
    pub general_public: bool,

    /// Minimum viewer clearance for this row (read-only here)
    pub public_level: i32,

    /// Billing state (read-only here)
    pub payment_status: String,
}

impl From<MemberModel> for ProfileData {
    fn from(member: MemberModel) -> Self {
        Self {
            id: member.id,
            display_name: member.display_name,
            company_name: member.company_name,
            industry_1: member.industry_1,
            industry_2: member.industry_2,
            want_to_introduce: member.want_to_introduce,
            can_introduce: member.can_introduce,
            latitude: member.latitude,
            longitude: member.longitude,
            visible: member.visible,
            general_public: member.general_public,
            public_level: member.public_level as i32,
            payment_status: member.payment_status,
        }
    }
}

/// Unredacted member row for the admin console
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "Full member record, admin console only")]
pub struct AdminMemberData {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    pub display_name: String,
    pub company_name: Option<String>,
    pub visible: bool,
    pub general_public: bool,
    pub public_level: i32,
    pub payment_status: String,

    /// Who last touched the row: "self" or "admin"
    pub last_updated_by: String,

    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<MemberModel> for AdminMemberData {
    fn from(member: MemberModel) -> Self {
        Self {
            id: member.id,
            user_id: member.user_id,
            branch_id: member.branch_id,
            display_name: member.display_name,
            company_name: member.company_name,
            visible: member.visible,
            general_public: member.general_public,
            public_level: member.public_level as i32,
            payment_status: member.payment_status,
            last_updated_by: member.last_updated_by,
            updated_at: member.updated_at,
            created_at: member.created_at,
        }
    }
}

/// One edge in the admin member connection
#[derive(Debug, Clone, GraphQLObject)]
pub struct MemberEdge {
    pub node: AdminMemberData,
    pub cursor: String,
}

/// Relay-style connection for the paginated admin member table
#[derive(Debug, Clone, GraphQLObject)]
pub struct MemberConnection {
    pub edges: Vec<MemberEdge>,
    pub page_info: PageInfo,
    pub total_count: i32,
}

use juniper::GraphQLObject;
use uuid::Uuid;

use crate::domains::branch::models::Branch as BranchModel;

/// Branch GraphQL data type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A regional branch pinned on the map")]
pub struct BranchData {
    /// Unique identifier
    pub id: Uuid,

    /// Branch name
    pub name: String,

    /// Region (prefecture/state) the branch belongs to
    pub region: String,

    /// City the branch meets in
    pub city: String,

    /// Marker latitude (decimal degrees)
    pub latitude: f64,

    /// Marker longitude (decimal degrees)
    pub longitude: f64,

    /// Number of members attached to the branch (derived)
    pub member_count: i32,

    /// Whether the branch appears on the anonymous map
    pub public: bool,
}

impl From<BranchModel> for BranchData {
    fn from(branch: BranchModel) -> Self {
        Self {
            id: branch.id,
            name: branch.name,
            region: branch.region,
            city: branch.city,
            latitude: branch.latitude,
            longitude: branch.longitude,
            member_count: branch.member_count,
            public: branch.public,
        }
    }
}

use anyhow::Result;
use sqlx::PgPool;

use crate::domains::branch::data::BranchData;
use crate::domains::branch::models::Branch;

/// Branches for the public map: published rows only.
pub async fn public_branches(pool: &PgPool) -> Result<Vec<BranchData>> {
    let branches = Branch::find_public(pool).await?;
    Ok(branches.into_iter().map(BranchData::from).collect())
}

/// Every branch, ordered by region, for the admin console.
/// Note: Admin auth is checked at the GraphQL layer.
pub async fn admin_branches(pool: &PgPool) -> Result<Vec<BranchData>> {
    let branches = Branch::find_all(pool).await?;
    Ok(branches.into_iter().map(BranchData::from).collect())
}

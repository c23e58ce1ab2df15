//! Member query actions

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::pagination::{page_info, Cursor, ValidatedPageArgs};
use crate::common::visibility::{
    resolve_disclosure_level, DisclosureLevel, MemberFilter, Viewer,
};
use crate::domains::member::data::{
    AdminMemberData, MemberCard, MemberConnection, MemberEdge, ProfileData,
};
use crate::domains::member::models::member::Member;

/// Directory read for the map.
///
/// The requested level is advisory; the policy resolves what the viewer is
/// actually served and the SQL filter enforces it.
pub async fn directory_members(
    viewer: Viewer,
    requested: Option<DisclosureLevel>,
    pool: &PgPool,
) -> Result<Vec<MemberCard>> {
    let level = resolve_disclosure_level(viewer, requested);
    let filter = MemberFilter::for_level(level);

    info!(?viewer, %level, "Loading directory members");

    let members = Member::find_directory(&filter, pool).await?;
    Ok(members.into_iter().map(MemberCard::from).collect())
}

/// The caller's own member row; None when no profile is linked yet.
pub async fn own_profile(user_id: Uuid, pool: &PgPool) -> Result<Option<ProfileData>> {
    let member = Member::find_by_user_id(user_id, pool).await?;
    Ok(member.map(ProfileData::from))
}

/// Paginated admin listing, most recently updated first.
/// Note: Admin auth is checked at the GraphQL layer.
pub async fn admin_members_paginated(
    args: &ValidatedPageArgs,
    pool: &PgPool,
) -> Result<MemberConnection> {
    let (members, has_more) = Member::find_all_paginated(args, pool).await?;
    let total_count = Member::count(pool).await? as i32;

    let edges: Vec<MemberEdge> = members
        .into_iter()
        .map(|member| MemberEdge {
            cursor: Cursor::encode(member.id),
            node: AdminMemberData::from(member),
        })
        .collect();

    let page_info = page_info(
        has_more,
        args,
        edges.first().map(|e| e.cursor.clone()),
        edges.last().map(|e| e.cursor.clone()),
    );

    Ok(MemberConnection {
        edges,
        page_info,
        total_count,
    })
}

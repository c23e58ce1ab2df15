//! Profile self-service action

use anyhow::{bail, Result};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::domains::member::data::ProfileData;
use crate::domains::member::models::member::{Member, ProfilePatch};

/// Apply the caller's profile edits to their own row.
///
/// The patch type only carries owner-editable fields; clearance, payment and
/// the audit column cannot arrive through it. The row is stamped
/// `last_updated_by = 'self'`.
pub async fn update_own_profile(
    user_id: Uuid,
    patch: ProfilePatch,
    pool: &PgPool,
) -> Result<ProfileData> {
    if patch.display_name.trim().is_empty() {
        bail!("Display name cannot be empty");
    }

    let member = match Member::find_by_user_id(user_id, pool).await? {
        Some(member) => member,
        None => bail!("No member profile is linked to this account"),
    };

    let updated = Member::update_profile(member.id, &patch, pool).await?;

    info!(member_id = %updated.id, visible = updated.visible, "Profile updated by owner");

    Ok(ProfileData::from(updated))
}

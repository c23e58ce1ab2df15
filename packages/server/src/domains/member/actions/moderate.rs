//! Admin moderation actions
//!
//! Note: Admin auth is checked at the GraphQL layer; these log who acted so
//! the audit trail survives outside the database row.

use anyhow::{bail, Result};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::domains::auth::models::User;
use crate::domains::member::data::AdminMemberData;
use crate::domains::member::models::member::Member;

/// Flip a member's directory visibility.
pub async fn toggle_member_visibility(
    member_id: Uuid,
    acting_admin: Uuid,
    pool: &PgPool,
) -> Result<AdminMemberData> {
    let updated = match Member::toggle_visibility(member_id, pool).await? {
        Some(member) => member,
        None => bail!("Member not found: {}", member_id),
    };

    info!(
        member_id = %updated.id,
        visible = updated.visible,
        admin = %acting_admin,
        "Member visibility toggled"
    );

    Ok(AdminMemberData::from(updated))
}

/// Link a pre-entered member row to a registered account.
///
/// There is no self-service claim path; linking is an admin action taken
/// after offline verification.
pub async fn assign_member_user(
    member_id: Uuid,
    user_email: &str,
    acting_admin: Uuid,
    pool: &PgPool,
) -> Result<AdminMemberData> {
    let email = user_email.trim().to_lowercase();

    let user = match User::find_by_email(&email, pool).await? {
        Some(user) => user,
        None => bail!("No account registered for {}", email),
    };

    if Member::find_by_user_id(user.id, pool).await?.is_some() {
        bail!("Account {} already owns a member profile", email);
    }

    let updated = match Member::assign_user(member_id, user.id, pool).await? {
        Some(member) => member,
        None => bail!("Member not found or already claimed: {}", member_id),
    };

    info!(
        member_id = %updated.id,
        user_id = %user.id,
        admin = %acting_admin,
        "Member profile linked to account"
    );

    Ok(AdminMemberData::from(updated))
}

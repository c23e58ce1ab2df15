//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;
use uuid::Uuid;

// Common types
use crate::common::pagination::PageArgs;
use crate::common::visibility::DisclosureLevel;

// Domain actions
use crate::domains::auth::actions as auth_actions;
use crate::domains::auth::actions::{AuthSession, SignUpRequest};
use crate::domains::branch::actions as branch_actions;
use crate::domains::member::actions as member_actions;

// Domain data types (GraphQL types)
use crate::domains::branch::data::BranchData;
use crate::domains::member::data::{AdminMemberData, MemberCard, MemberConnection, ProfileData};

// Domain models (for queries)
use crate::domains::auth::models::User;
use crate::domains::branch::models::Branch;
use crate::domains::member::models::member::{Member, ProfilePatch};

/// A signed-in account
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct UserData {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

/// Result of signing up or signing in
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct AuthPayload {
    /// Bearer token for subsequent requests
    pub token: String,
    pub user: UserData,
}

impl From<AuthSession> for AuthPayload {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: UserData::from(session.user),
        }
    }
}

/// Admin dashboard tile counts
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct DashboardMetrics {
    pub total_members: i32,
    pub visible_members: i32,
    /// Members with an active payment status
    pub active_members: i32,
    pub total_branches: i32,
}

/// Owner-editable profile fields. Clearance level, payment status and the
/// audit column have no input counterpart.
#[derive(juniper::GraphQLInputObject)]
pub struct UpdateProfileInput {
    pub display_name: String,
    pub company_name: Option<String>,
    pub industry_1: Option<String>,
    pub industry_2: Option<String>,
    pub want_to_introduce: Option<String>,
    pub can_introduce: Option<String>,
    pub visible: bool,
    pub general_public: bool,
}

impl From<UpdateProfileInput> for ProfilePatch {
    fn from(input: UpdateProfileInput) -> Self {
        ProfilePatch {
            display_name: input.display_name,
            company_name: input.company_name,
            industry_1: input.industry_1,
            industry_2: input.industry_2,
            want_to_introduce: input.want_to_introduce,
            can_introduce: input.can_introduce,
            visible: input.visible,
            general_public: input.general_public,
        }
    }
}

/// Convert anyhow::Error to juniper FieldError for thin resolvers
fn to_field_error(e: anyhow::Error) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Directory Queries
    // =========================================================================

    /// Branches published to the map
    async fn branches(ctx: &GraphQLContext) -> FieldResult<Vec<BranchData>> {
        branch_actions::public_branches(&ctx.db_pool).await.map_err(|e| {
            error!("Failed to load branches: {}", e);
            FieldError::new("Failed to load branches", juniper::Value::null())
        })
    }

    /// Directory members at the viewer's effective disclosure level
    ///
    /// `level` is advisory: anonymous callers are served level 1 whatever
    /// they ask for, and signed-in members choose between 2 and 3.
    async fn members(
        ctx: &GraphQLContext,
        level: Option<i32>,
    ) -> FieldResult<Vec<MemberCard>> {
        let requested = level
            .map(|raw| {
                DisclosureLevel::from_i32(raw).ok_or_else(|| {
                    FieldError::new("Disclosure level must be 1, 2 or 3", juniper::Value::null())
                })
            })
            .transpose()?;

        member_actions::directory_members(ctx.viewer(), requested, &ctx.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to load directory members: {}", e);
                FieldError::new("Failed to load members", juniper::Value::null())
            })
    }

    // =========================================================================
    // Session Queries
    // =========================================================================

    /// The signed-in account, or null for anonymous callers
    fn me(ctx: &GraphQLContext) -> Option<UserData> {
        ctx.auth_user.as_ref().map(|user| UserData {
            id: user.user_id,
            email: user.email.clone(),
            role: if user.is_admin { "admin" } else { "member" }.to_string(),
        })
    }

    /// The caller's own member profile; null is a valid "no profile" state
    async fn my_profile(ctx: &GraphQLContext) -> FieldResult<Option<ProfileData>> {
        let user_id = ctx.require_auth()?.user_id;

        member_actions::own_profile(user_id, &ctx.db_pool)
            .await
            .map_err(to_field_error)
    }

    // =========================================================================
    // Admin Queries
    // =========================================================================

    /// Get a single member by ID (admin only)
    async fn admin_member(
        ctx: &GraphQLContext,
        id: Uuid,
    ) -> FieldResult<Option<AdminMemberData>> {
        ctx.require_admin()?;

        let member = Member::find_by_id(id, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;
        Ok(member.map(AdminMemberData::from))
    }

    /// All members regardless of visibility, most recently updated first
    /// (admin only)
    async fn admin_members(
        ctx: &GraphQLContext,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> FieldResult<MemberConnection> {
        ctx.require_admin()?;

        let args = PageArgs {
            first,
            after,
            last,
            before,
        };
        let validated = args
            .validate()
            .map_err(|e| FieldError::new(e, juniper::Value::null()))?;

        member_actions::admin_members_paginated(&validated, &ctx.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to get paginated members: {}", e);
                FieldError::new(e.to_string(), juniper::Value::null())
            })
    }

    /// All branches ordered by region (admin only)
    async fn admin_branches(ctx: &GraphQLContext) -> FieldResult<Vec<BranchData>> {
        ctx.require_admin()?;

        branch_actions::admin_branches(&ctx.db_pool)
            .await
            .map_err(to_field_error)
    }

    /// Dashboard tile counts (admin only)
    async fn admin_metrics(ctx: &GraphQLContext) -> FieldResult<DashboardMetrics> {
        ctx.require_admin()?;

        let stats = Member::stats(&ctx.db_pool).await.map_err(to_field_error)?;
        let branch_count = Branch::count(&ctx.db_pool).await.map_err(to_field_error)?;

        Ok(DashboardMetrics {
            total_members: stats.total as i32,
            visible_members: stats.visible as i32,
            active_members: stats.payment_active as i32,
            total_branches: branch_count as i32,
        })
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Session Mutations
    // =========================================================================

    /// Register an account and receive a session token
    async fn sign_up(
        ctx: &GraphQLContext,
        email: String,
        password: String,
        wants_listing: Option<bool>,
    ) -> FieldResult<AuthPayload> {
        let request = SignUpRequest {
            email,
            password,
            wants_listing: wants_listing.unwrap_or(false),
        };

        let session =
            auth_actions::sign_up(request, &ctx.admin_emails, &ctx.jwt_service, &ctx.db_pool)
                .await
                .map_err(to_field_error)?;

        Ok(AuthPayload::from(session))
    }

    /// Exchange credentials for a session token
    async fn sign_in(
        ctx: &GraphQLContext,
        email: String,
        password: String,
    ) -> FieldResult<AuthPayload> {
        let session = auth_actions::sign_in(&email, &password, &ctx.jwt_service, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(AuthPayload::from(session))
    }

    /// Revoke the presented token
    async fn sign_out(ctx: &GraphQLContext) -> FieldResult<bool> {
        let user = ctx.require_auth()?;

        auth_actions::sign_out(user.user_id, user.jti, user.expires_at, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(true)
    }

    // =========================================================================
    // Profile Mutations
    // =========================================================================

    /// Update the caller's own profile (owner-editable fields only)
    async fn update_profile(
        ctx: &GraphQLContext,
        input: UpdateProfileInput,
    ) -> FieldResult<ProfileData> {
        let user_id = ctx.require_auth()?.user_id;

        member_actions::update_own_profile(user_id, input.into(), &ctx.db_pool)
            .await
            .map_err(to_field_error)
    }

    // =========================================================================
    // Admin Mutations
    // =========================================================================

    /// Flip a member's directory visibility (admin only)
    async fn toggle_member_visibility(
        ctx: &GraphQLContext,
        member_id: Uuid,
    ) -> FieldResult<AdminMemberData> {
        let admin_id = ctx.require_admin()?.user_id;

        member_actions::toggle_member_visibility(member_id, admin_id, &ctx.db_pool)
            .await
            .map_err(to_field_error)
    }

    /// Link a pre-entered member row to a registered account (admin only)
    async fn admin_assign_member(
        ctx: &GraphQLContext,
        member_id: Uuid,
        user_email: String,
    ) -> FieldResult<AdminMemberData> {
        let admin_id = ctx.require_admin()?.user_id;

        member_actions::assign_member_user(member_id, &user_email, admin_id, &ctx.db_pool)
            .await
            .map_err(to_field_error)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

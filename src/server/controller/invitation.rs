use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::time::Duration;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        band::MembershipDto,
        invitation::{InvitationDto, RedeemInvitationDto},
    },
    server::{
        data::invitation::InvitationRepository,
        error::AppError,
        middleware::auth::Principal,
        model::invitation::{CreateInvitationParam, KeepInvitationParam, RedeemInvitationParam},
        service::invitation::{
            generator::InvitationGenerator, redeemer::InvitationRedeemer, InvitationService,
        },
        state::AppState,
    },
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitation";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateInvitationParams {
    /// Seconds until the invitation expires (default: 900)
    pub expire: Option<u64>,
}

/// Create an invitation code for a band.
///
/// Generates a random ten-letter code. Code collisions are retried with exponential
/// backoff, so this request may take several seconds under contention.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `principal` - Account creating the invitation
/// - `band_id` - Band the invitation grants access to
/// - `params` - Optional lifetime in seconds
///
/// # Returns
/// - `201 Created` - The new invitation
/// - `400 Bad Request` - Band id is zero or the lifetime is out of range
/// - `401 Unauthorized` - Missing or invalid access cookie
/// - `404 Not Found` - Band does not exist
/// - `500 Internal Server Error` - Could not find a free code, or database error
/// - `503 Service Unavailable` - Server shutting down
#[utoipa::path(
    post,
    path = "/api/bands/{band_id}/invitations",
    tag = INVITATION_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID"),
        CreateInvitationParams
    ),
    responses(
        (status = 201, description = "Successfully created invitation", body = InvitationDto),
        (status = 400, description = "Invalid band or expiry", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Band not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Server shutting down", body = ErrorDto)
    ),
)]
pub async fn create_invitation(
    State(state): State<AppState>,
    principal: Principal,
    Path(band_id): Path<i32>,
    Query(params): Query<CreateInvitationParams>,
) -> Result<impl IntoResponse, AppError> {
    let repo = InvitationRepository::new(&state.db);
    let cancel = state.shutdown.child_token();

    let invitation = InvitationGenerator::new(&repo)
        .create(
            CreateInvitationParam {
                creator_id: principal.account_id,
                band_id,
                ttl: params.expire.map(Duration::from_secs),
            },
            &cancel,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(invitation.into_dto())))
}

/// Mark an invitation as kept.
///
/// Kept invitations outlive the short unkept retention window but are still removed
/// after the hard retention ceiling. Only the invitation's creator may keep it.
#[utoipa::path(
    post,
    path = "/api/invitations/{invitation_id}/keep",
    tag = INVITATION_TAG,
    params(
        ("invitation_id" = i32, Path, description = "Invitation ID")
    ),
    responses(
        (status = 204, description = "Invitation kept"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn keep_invitation(
    State(state): State<AppState>,
    principal: Principal,
    Path(invitation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    InvitationService::new(&state.db)
        .keep(KeepInvitationParam {
            invitation_id,
            creator_id: principal.account_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join a band by redeeming an invitation code.
///
/// # Returns
/// - `201 Created` - The new membership
/// - `400 Bad Request` - Malformed or expired code
/// - `401 Unauthorized` - Missing or invalid access cookie
/// - `404 Not Found` - Unknown code or the band no longer exists
/// - `409 Conflict` - Already a member of the band
#[utoipa::path(
    post,
    path = "/api/bands/join",
    tag = INVITATION_TAG,
    request_body = RedeemInvitationDto,
    responses(
        (status = 201, description = "Joined band", body = MembershipDto),
        (status = 400, description = "Malformed or expired code", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Invitation or band not found", body = ErrorDto),
        (status = 409, description = "Already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn redeem_invitation(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<RedeemInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    let membership = InvitationRedeemer::new(&state.db)
        .redeem(RedeemInvitationParam {
            account_id: principal.account_id,
            code: payload.code,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(membership.into_dto())))
}

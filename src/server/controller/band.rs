use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        band::{AccountBandDto, BandDto, CreateBandDto},
    },
    server::{
        error::AppError, middleware::auth::Principal, model::band::CreateBandParam,
        service::band::BandService, state::AppState,
    },
};

/// Tag for grouping band endpoints in OpenAPI documentation
pub static BAND_TAG: &str = "band";

/// List the bands the current account belongs to.
///
/// # Returns
/// - `200 OK` - Bands with the account's admin flag and join time
/// - `401 Unauthorized` - Missing or invalid access cookie
#[utoipa::path(
    get,
    path = "/api/bands",
    tag = BAND_TAG,
    responses(
        (status = 200, description = "Bands for the current account", body = Vec<AccountBandDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bands(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, AppError> {
    let bands = BandService::new(&state.db)
        .list_for_account(principal.account_id)
        .await?;

    let dtos: Vec<AccountBandDto> = bands.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a band by id.
#[utoipa::path(
    get,
    path = "/api/bands/{band_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Band found", body = BandDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Band not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_band(
    State(state): State<AppState>,
    _principal: Principal,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let band = BandService::new(&state.db).get(band_id).await?;

    Ok((StatusCode::OK, Json(band.into_dto())))
}

/// Create a band with the current account as its admin.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `principal` - Account creating the band
/// - `payload` - Band name
///
/// # Returns
/// - `201 Created` - Band created and creator added as admin
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Missing or invalid access cookie
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bands",
    tag = BAND_TAG,
    request_body = CreateBandDto,
    responses(
        (status = 201, description = "Successfully created band", body = BandDto),
        (status = 400, description = "Invalid band data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_band(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<CreateBandDto>,
) -> Result<impl IntoResponse, AppError> {
    let band = BandService::new(&state.db)
        .create(CreateBandParam {
            creator_id: principal.account_id,
            name: payload.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(band.into_dto())))
}

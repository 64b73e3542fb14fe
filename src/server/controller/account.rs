use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        account::{AccountDto, CreateAccountDto, LoginDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::Principal,
        model::account::RegisterAccountParam,
        service::account::AccountService,
        state::AppState,
        util::cookie::access_cookie,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Create a new account.
///
/// Registers the account and sets the access cookie. If the token cannot be issued the
/// account is still created and returned, just without the cookie.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token codec
/// - `payload` - Email, password and names for the new account
///
/// # Returns
/// - `201 Created` - Account created; `Set-Cookie` carries the access token
/// - `400 Bad Request` - Empty email or password
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = ACCOUNT_TAG,
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Successfully created account", body = AccountDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AccountService::new(&state.db)
        .register(RegisterAccountParam {
            email: payload.email,
            password: payload.password,
            given_name: payload.given_name,
            family_name: payload.family_name,
        })
        .await?;

    let mut headers = HeaderMap::new();
    match state.tokens.issue(account.id) {
        Ok(token) => match access_cookie(&token) {
            Ok(cookie) => {
                headers.insert(SET_COOKIE, cookie);
            }
            Err(e) => {
                tracing::warn!(account_id = account.id, "Failed to build access cookie: {}", e)
            }
        },
        Err(e) => {
            tracing::warn!(account_id = account.id, "Failed to issue access token: {}", e)
        }
    }

    Ok((StatusCode::CREATED, headers, Json(account.into_dto())))
}

/// Log in with email and password.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token codec
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Credentials matched; `Set-Cookie` carries the access token
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = ACCOUNT_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = AccountDto),
        (status = 401, description = "Failed to authenticate user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AccountService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    let token = state.tokens.issue(account.id)?;
    let cookie = access_cookie(&token).map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(account.into_dto()),
    ))
}

/// Get the currently authenticated account.
///
/// # Returns
/// - `200 OK` - The account behind the access cookie
/// - `401 Unauthorized` - Missing or invalid access cookie
/// - `404 Not Found` - The account no longer exists
#[utoipa::path(
    get,
    path = "/api/me",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Current account", body = AccountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, AppError> {
    let account = AccountService::new(&state.db)
        .get(principal.account_id)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

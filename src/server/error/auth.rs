use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::token::TokenError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no access cookie.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No access cookie provided")]
    MissingCredential,

    /// The access cookie was present but its token failed validation.
    ///
    /// The wrapped `TokenError` says why; it is logged and never sent to the client.
    /// Results in a 401 Unauthorized response.
    #[error("Failed to validate access token: {0}")]
    InvalidCredential(#[from] TokenError),

    /// Login failed because the email is unknown or the password does not match.
    ///
    /// Both cases produce the same response so the endpoint does not reveal which
    /// accounts exist. Results in a 401 Unauthorized response.
    #[error("Email or password did not match")]
    InvalidLogin,

    /// Hashing or parsing a stored password hash failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to status codes with deliberately generic messages:
/// - `MissingCredential` / `InvalidCredential` → 401 Unauthorized with "Not authenticated"
/// - `InvalidLogin` → 401 Unauthorized with "Failed to authenticate user"
/// - `PasswordHash` → 500 Internal Server Error with generic message
///
/// The underlying reason is logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredential | Self::InvalidCredential(_) => {
                tracing::debug!("Rejected request: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not authenticated".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidLogin => {
                tracing::debug!("Rejected login: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Failed to authenticate user".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::PasswordHash(msg) => {
                tracing::error!("Password hashing failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

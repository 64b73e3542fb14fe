use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Outcome of a failed invitation insert, classified from the store's constraint errors.
#[derive(Error, Debug)]
pub enum InsertInvitationError {
    /// The unique constraint on the invitation code rejected the row.
    #[error("Invitation code is already taken")]
    CodeTaken,

    /// A foreign key on the row points at a band or account that does not exist.
    #[error("Invitation references a missing band")]
    BandMissing,

    /// Any other persistence failure.
    #[error(transparent)]
    Store(#[from] DbErr),
}

#[derive(Error, Debug)]
pub enum InvitationError {
    /// The band id was zero, treated as a missing reference.
    #[error("Request must contain a band id")]
    InvalidBand,

    /// The requested lifetime cannot be represented as an expiry instant.
    #[error("Requested invitation lifetime is out of range")]
    InvalidExpiry,

    /// The code is not ten uppercase ASCII letters.
    #[error("Invitation code must be 10 letters")]
    InvalidCode,

    /// Every attempt to insert a fresh code collided with an existing one.
    #[error("Failed to generate a unique invitation code after {attempts} attempts")]
    Exhausted {
        /// Number of insert attempts made
        attempts: u32,
    },

    /// The caller's cancellation signal fired while waiting to retry.
    #[error("Invitation generation was cancelled")]
    Cancelled,

    /// No invitation matches the code.
    #[error("Could not find an invitation related to this code")]
    NotFound,

    /// The invitation expired at or before the redemption instant.
    #[error("This invitation code expired at {expired_at}")]
    Expired {
        /// When the invitation stopped being redeemable
        expired_at: DateTime<Utc>,
    },

    /// The band the invitation grants access to does not exist.
    #[error("The band this invitation refers to does not exist")]
    BandNotFound(i32),

    /// The account already belongs to the band.
    #[error("Account is already a member of this band")]
    AlreadyMember,

    /// Unexpected persistence failure.
    #[error(transparent)]
    Store(#[from] DbErr),
}

/// Converts invitation errors into HTTP responses.
///
/// - `InvalidBand` / `InvalidExpiry` / `InvalidCode` / `Expired` → 400 Bad Request
/// - `NotFound` / `BandNotFound` → 404 Not Found
/// - `AlreadyMember` → 409 Conflict
/// - `Cancelled` → 503 Service Unavailable
/// - `Exhausted` / `Store` → 500 Internal Server Error
///
/// Exhaustion is an operational condition rather than a client mistake, so it is
/// reported as a server failure.
impl IntoResponse for InvitationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidBand | Self::InvalidExpiry | Self::InvalidCode | Self::Expired { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound | Self::BandNotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyMember => StatusCode::CONFLICT,
            Self::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            Self::Exhausted { .. } => {
                tracing::error!("{}", self);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Failed to generate an invitation, please try again later"
                            .to_string(),
                    }),
                )
                    .into_response();
            }
            Self::Store(err) => {
                tracing::error!("Invitation store error: {}", err);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

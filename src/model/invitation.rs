use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InvitationDto {
    pub id: i32,
    /// Ten uppercase ASCII letters.
    pub code: String,
    pub band_id: i32,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub kept: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RedeemInvitationDto {
    pub code: String,
}

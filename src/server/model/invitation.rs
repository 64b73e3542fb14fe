//! Invitation domain models and parameters.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::model::invitation::InvitationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub id: i32,
    pub code: String,
    pub band_id: i32,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub kept: bool,
}

impl Invitation {
    /// Whether the invitation may still be redeemed at `now`.
    ///
    /// Redemption is allowed only strictly before the expiry instant.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn into_dto(self) -> InvitationDto {
        InvitationDto {
            id: self.id,
            code: self.code,
            band_id: self.band_id,
            creator_id: self.creator_id,
            created_at: self.created_at,
            expires_at: self.expires_at,
            kept: self.kept,
        }
    }

    pub fn from_entity(entity: entity::invitation::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            band_id: entity.band_id,
            creator_id: entity.creator_id,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
            kept: entity.kept,
        }
    }
}

/// Request to mint a new invitation for a band.
#[derive(Debug, Clone, Copy)]
pub struct CreateInvitationParam {
    pub creator_id: i32,
    pub band_id: i32,
    /// Lifetime from creation. `None` or zero selects the default.
    pub ttl: Option<Duration>,
}

/// A fully determined invitation row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewInvitation {
    pub code: String,
    pub band_id: i32,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RedeemInvitationParam {
    pub account_id: i32,
    pub code: String,
}

#[derive(Debug, Clone, Copy)]
pub struct KeepInvitationParam {
    pub invitation_id: i32,
    pub creator_id: i32,
}

//! Band and membership domain models.

use chrono::{DateTime, Utc};

use crate::model::band::{AccountBandDto, BandDto, MembershipDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Band {
    pub fn into_dto(self) -> BandDto {
        BandDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::band::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Link between an account and a band.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub account_id: i32,
    pub band_id: i32,
    pub is_admin: bool,
    pub joined_at: DateTime<Utc>,
}

impl Membership {
    pub fn into_dto(self) -> MembershipDto {
        MembershipDto {
            account_id: self.account_id,
            band_id: self.band_id,
            account_is_admin: self.is_admin,
            created_at: self.joined_at,
        }
    }

    pub fn from_entity(entity: entity::account_band::Model) -> Self {
        Self {
            account_id: entity.account_id,
            band_id: entity.band_id,
            is_admin: entity.account_is_admin,
            joined_at: entity.created_at,
        }
    }
}

/// A band joined with the viewing account's membership in it.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBand {
    pub band: Band,
    pub is_admin: bool,
    pub joined_at: DateTime<Utc>,
}

impl AccountBand {
    pub fn into_dto(self) -> AccountBandDto {
        AccountBandDto {
            id: self.band.id,
            name: self.band.name,
            account_is_admin: self.is_admin,
            joined_at: self.joined_at,
            created_at: self.band.created_at,
            updated_at: self.band.updated_at,
        }
    }
}

/// Parameters for creating a band along with its creator's admin membership.
#[derive(Debug, Clone)]
pub struct CreateBandParam {
    pub creator_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Copy)]
pub struct CreateMembershipParam {
    pub account_id: i32,
    pub band_id: i32,
    pub is_admin: bool,
}

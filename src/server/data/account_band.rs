//! Membership data repository.
//!
//! Provides `AccountBandRepository` for inserting and reading rows of the account/band
//! association table. The pair `(account_id, band_id)` is the primary key, so a second
//! membership for the same pair is rejected by the database.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::band::{CreateMembershipParam, Membership};

/// Repository providing database operations for band memberships.
pub struct AccountBandRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountBandRepository<'a, C> {
    /// Creates a new AccountBandRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `AccountBandRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership row.
    ///
    /// # Arguments
    /// - `param` - Account, band and admin flag for the membership
    ///
    /// # Returns
    /// - `Ok(Membership)` - The created membership
    /// - `Err(DbErr)` - Database error; a duplicate pair is a unique constraint violation
    ///   and a missing account or band is a foreign key violation
    pub async fn create(&self, param: CreateMembershipParam) -> Result<Membership, DbErr> {
        let now = Utc::now();
        let entity = entity::account_band::ActiveModel {
            account_id: ActiveValue::Set(param.account_id),
            band_id: ActiveValue::Set(param.band_id),
            account_is_admin: ActiveValue::Set(param.is_admin),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    /// Finds the membership of an account in a band.
    ///
    /// # Returns
    /// - `Ok(Some(Membership))` - The account belongs to the band
    /// - `Ok(None)` - No such membership
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, account_id: i32, band_id: i32) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::AccountBand::find_by_id((account_id, band_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }
}

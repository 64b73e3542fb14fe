//! Band data repository for database operations.
//!
//! This module provides the `BandRepository` for creating bands and reading them back,
//! either directly by id or through an account's memberships. The repository is generic
//! over the connection so band creation can run inside a transaction together with the
//! creator's admin membership.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::band::{AccountBand, Band};

/// Repository providing database operations for bands.
pub struct BandRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BandRepository<'a, C> {
    /// Creates a new BandRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `BandRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new band with the given name.
    ///
    /// # Returns
    /// - `Ok(Band)` - The created band
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, name: String) -> Result<Band, DbErr> {
        let now = Utc::now();
        let entity = entity::band::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Band::from_entity(entity))
    }

    /// Finds a band by id.
    ///
    /// # Returns
    /// - `Ok(Some(Band))` - Band found
    /// - `Ok(None)` - No band with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, band_id: i32) -> Result<Option<Band>, DbErr> {
        let entity = entity::prelude::Band::find_by_id(band_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Band::from_entity))
    }

    /// Gets every band the account belongs to, with the account's role in each.
    ///
    /// Joins the membership table to bands and returns results ordered by the time the
    /// account joined, oldest first.
    ///
    /// # Arguments
    /// - `account_id` - Id of the member account
    ///
    /// # Returns
    /// - `Ok(Vec<AccountBand>)` - Bands joined with membership details (may be empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_account(&self, account_id: i32) -> Result<Vec<AccountBand>, DbErr> {
        let rows = entity::prelude::AccountBand::find()
            .filter(entity::account_band::Column::AccountId.eq(account_id))
            .order_by_asc(entity::account_band::Column::CreatedAt)
            .find_also_related(entity::prelude::Band)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, band)| {
                band.map(|band| AccountBand {
                    band: Band::from_entity(band),
                    is_admin: membership.account_is_admin,
                    joined_at: membership.created_at,
                })
            })
            .collect())
    }
}

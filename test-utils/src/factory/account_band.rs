//! Membership factory linking accounts to bands.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating account-band memberships.
///
/// The account and band must already exist.
pub struct AccountBandFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: i32,
    band_id: i32,
    admin: bool,
}

impl<'a> AccountBandFactory<'a> {
    /// Creates a new factory for a non-admin membership.
    pub fn new(db: &'a DatabaseConnection, account_id: i32, band_id: i32) -> Self {
        Self {
            db,
            account_id,
            band_id,
            admin: false,
        }
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the membership into the database.
    pub async fn build(self) -> Result<entity::account_band::Model, DbErr> {
        let now = Utc::now();
        entity::account_band::ActiveModel {
            account_id: ActiveValue::Set(self.account_id),
            band_id: ActiveValue::Set(self.band_id),
            account_is_admin: ActiveValue::Set(self.admin),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin membership.
pub async fn create_membership(
    db: &DatabaseConnection,
    account_id: i32,
    band_id: i32,
) -> Result<entity::account_band::Model, DbErr> {
    AccountBandFactory::new(db, account_id, band_id).build().await
}

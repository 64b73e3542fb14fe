//! Band service for creating and listing bands.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{account_band::AccountBandRepository, band::BandRepository},
    error::AppError,
    model::band::{AccountBand, Band, CreateBandParam, CreateMembershipParam},
};

pub struct BandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a band and makes its creator an admin member.
    ///
    /// Both rows are written in one transaction; if the membership insert fails the band
    /// is rolled back.
    ///
    /// # Arguments
    /// - `param` - Creator account id and band name
    ///
    /// # Returns
    /// - `Ok(Band)` - The created band
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn create(&self, param: CreateBandParam) -> Result<Band, AppError> {
        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Band name must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let band = BandRepository::new(&txn).create(name).await?;
        AccountBandRepository::new(&txn)
            .create(CreateMembershipParam {
                account_id: param.creator_id,
                band_id: band.id,
                is_admin: true,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(band_id = band.id, creator_id = param.creator_id, "Created band");

        Ok(band)
    }

    /// Gets a band by id.
    ///
    /// # Returns
    /// - `Ok(Band)` - Band found
    /// - `Err(AppError::NotFound)` - No band with that id
    pub async fn get(&self, band_id: i32) -> Result<Band, AppError> {
        BandRepository::new(self.db)
            .find_by_id(band_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Band {} not found", band_id)))
    }

    /// Lists the bands an account belongs to.
    pub async fn list_for_account(&self, account_id: i32) -> Result<Vec<AccountBand>, AppError> {
        Ok(BandRepository::new(self.db)
            .get_for_account(account_id)
            .await?)
    }
}

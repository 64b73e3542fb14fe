//! Band factory for creating test band entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bands.
pub struct BandFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> BandFactory<'a> {
    /// Creates a new BandFactory named `"Band {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Band {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the band entity into the database.
    pub async fn build(self) -> Result<entity::band::Model, DbErr> {
        let now = Utc::now();
        entity::band::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a band with default values.
pub async fn create_band(db: &DatabaseConnection) -> Result<entity::band::Model, DbErr> {
    BandFactory::new(db).build().await
}

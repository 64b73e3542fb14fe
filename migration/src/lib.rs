pub use sea_orm_migration::prelude::*;

mod m20240612_000001_create_account_table;
mod m20240612_000002_create_band_table;
mod m20240612_000003_create_account_band_table;
mod m20240705_000004_create_invitation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240612_000001_create_account_table::Migration),
            Box::new(m20240612_000002_create_band_table::Migration),
            Box::new(m20240612_000003_create_account_band_table::Migration),
            Box::new(m20240705_000004_create_invitation_table::Migration),
        ]
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240612_000001_create_account_table::Account, m20240612_000002_create_band_table::Band,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountBand::Table)
                    .if_not_exists()
                    .col(integer(AccountBand::AccountId))
                    .col(integer(AccountBand::BandId))
                    .col(boolean(AccountBand::AccountIsAdmin).default(false))
                    .col(
                        timestamp_with_time_zone(AccountBand::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(AccountBand::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    // One membership per (account, band); a duplicate join is a
                    // unique violation.
                    .primary_key(
                        Index::create()
                            .name("pk_account_band")
                            .col(AccountBand::AccountId)
                            .col(AccountBand::BandId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_band_account_id")
                            .from(AccountBand::Table, AccountBand::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_band_band_id")
                            .from(AccountBand::Table, AccountBand::BandId)
                            .to(Band::Table, Band::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_account_band_band_id")
                    .table(AccountBand::Table)
                    .col(AccountBand::BandId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_account_band_band_id")
                    .table(AccountBand::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccountBand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccountBand {
    Table,
    AccountId,
    BandId,
    AccountIsAdmin,
    CreatedAt,
    UpdatedAt,
}

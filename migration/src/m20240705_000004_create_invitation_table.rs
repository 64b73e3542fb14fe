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
                    .table(Invitation::Table)
                    .if_not_exists()
                    .col(pk_auto(Invitation::Id))
                    // Sole arbiter of code collisions between concurrent writers
                    .col(string_len_uniq(Invitation::Code, 10))
                    .col(integer(Invitation::BandId))
                    .col(integer(Invitation::CreatorId))
                    .col(
                        timestamp_with_time_zone(Invitation::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone(Invitation::ExpiresAt))
                    .col(boolean(Invitation::Kept).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_band_id")
                            .from(Invitation::Table, Invitation::BandId)
                            .to(Band::Table, Band::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_creator_id")
                            .from(Invitation::Table, Invitation::CreatorId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The culler filters on creation time every run
        manager
            .create_index(
                Index::create()
                    .name("idx_invitation_created_at")
                    .table(Invitation::Table)
                    .col(Invitation::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_invitation_created_at")
                    .table(Invitation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Invitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invitation {
    Table,
    Id,
    Code,
    BandId,
    CreatorId,
    CreatedAt,
    ExpiresAt,
    Kept,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingAsset::Table)
                    .if_not_exists()
                    .col(pk_auto(PendingAsset::Id))
                    .col(string_null(PendingAsset::CompanyName))
                    .col(string(PendingAsset::AssetName))
                    .col(timestamp(PendingAsset::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PendingAsset::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PendingAsset {
    Table,
    Id,
    CompanyName,
    AssetName,
    CreatedAt,
}

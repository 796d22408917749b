use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_company::Company;

static IDX_BRAND_ASSET_COMPANY_ID: &str = "idx-brand_asset-company_id";
static FK_BRAND_ASSET_COMPANY_ID: &str = "fk-brand_asset-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrandAsset::Table)
                    .if_not_exists()
                    .col(pk_auto(BrandAsset::Id))
                    .col(integer(BrandAsset::CompanyId))
                    .col(string(BrandAsset::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BRAND_ASSET_COMPANY_ID)
                            .from_tbl(BrandAsset::Table)
                            .from_col(BrandAsset::CompanyId)
                            .to_tbl(Company::Table)
                            .to_col(Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BRAND_ASSET_COMPANY_ID)
                    .table(BrandAsset::Table)
                    .col(BrandAsset::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BRAND_ASSET_COMPANY_ID)
                    .table(BrandAsset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BrandAsset::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BrandAsset {
    Table,
    Id,
    CompanyId,
    Name,
}

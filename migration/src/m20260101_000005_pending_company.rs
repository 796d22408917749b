use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingCompany::Table)
                    .if_not_exists()
                    .col(pk_auto(PendingCompany::Id))
                    .col(string(PendingCompany::CompanyName))
                    .col(string_null(PendingCompany::Country))
                    .col(string_null(PendingCompany::Region))
                    .col(string_null(PendingCompany::ParentCompanyName))
                    .col(string_null(PendingCompany::Reason))
                    .col(timestamp(PendingCompany::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PendingCompany::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PendingCompany {
    Table,
    Id,
    CompanyName,
    Country,
    Region,
    ParentCompanyName,
    Reason,
    CreatedAt,
}

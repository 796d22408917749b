use sea_orm_migration::{prelude::*, schema::*};

static IDX_COMPANY_NAME: &str = "idx-company-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string(Company::Name))
                    .col(string_null(Company::Country))
                    .col(string_null(Company::Region))
                    .col(big_integer(Company::VoteUp).default(0))
                    .col(big_integer(Company::VoteDown).default(0))
                    .col(timestamp(Company::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPANY_NAME)
                    .table(Company::Table)
                    .col(Company::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPANY_NAME)
                    .table(Company::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    Id,
    Name,
    Country,
    Region,
    VoteUp,
    VoteDown,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_company::Company;

static FK_COMPANY_REGION_VOTE_COMPANY_ID: &str = "fk-company_region_vote-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyRegionVote::Table)
                    .if_not_exists()
                    .col(pk_auto(CompanyRegionVote::Id))
                    .col(integer_uniq(CompanyRegionVote::CompanyId))
                    .col(big_integer(CompanyRegionVote::VoteUp).default(0))
                    .col(big_integer(CompanyRegionVote::VoteDown).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMPANY_REGION_VOTE_COMPANY_ID)
                            .from_tbl(CompanyRegionVote::Table)
                            .from_col(CompanyRegionVote::CompanyId)
                            .to_tbl(Company::Table)
                            .to_col(Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyRegionVote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CompanyRegionVote {
    Table,
    Id,
    CompanyId,
    VoteUp,
    VoteDown,
}

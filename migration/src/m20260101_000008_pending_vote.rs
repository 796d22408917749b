use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_company::Company;

static IDX_PENDING_VOTE_COMPANY_VOTER_WINDOW: &str =
    "idx-pending_vote-company_id-voter_key-vote_window";
static FK_PENDING_VOTE_COMPANY_ID: &str = "fk-pending_vote-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingVote::Table)
                    .if_not_exists()
                    .col(pk_auto(PendingVote::Id))
                    .col(integer(PendingVote::CompanyId))
                    .col(string_len(PendingVote::VoteType, 4))
                    .col(string(PendingVote::VoterKey))
                    .col(big_integer(PendingVote::VoteWindow))
                    .col(string_null(PendingVote::Country))
                    .col(string_null(PendingVote::Region))
                    .col(timestamp(PendingVote::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PENDING_VOTE_COMPANY_ID)
                            .from_tbl(PendingVote::Table)
                            .from_col(PendingVote::CompanyId)
                            .to_tbl(Company::Table)
                            .to_col(Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One vote per company per voter per window
        manager
            .create_index(
                Index::create()
                    .name(IDX_PENDING_VOTE_COMPANY_VOTER_WINDOW)
                    .table(PendingVote::Table)
                    .col(PendingVote::CompanyId)
                    .col(PendingVote::VoterKey)
                    .col(PendingVote::VoteWindow)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PENDING_VOTE_COMPANY_VOTER_WINDOW)
                    .table(PendingVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PendingVote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PendingVote {
    Table,
    Id,
    CompanyId,
    VoteType,
    VoterKey,
    VoteWindow,
    Country,
    Region,
    CreatedAt,
}

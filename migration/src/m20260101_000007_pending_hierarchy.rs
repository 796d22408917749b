use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_company::Company;

static FK_PENDING_HIERARCHY_PARENT_ID: &str = "fk-pending_hierarchy-parent_id";
static FK_PENDING_HIERARCHY_CHILD_ID: &str = "fk-pending_hierarchy-child_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingHierarchy::Table)
                    .if_not_exists()
                    .col(pk_auto(PendingHierarchy::Id))
                    .col(integer(PendingHierarchy::ParentId))
                    .col(integer(PendingHierarchy::ChildId))
                    .col(timestamp(PendingHierarchy::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PENDING_HIERARCHY_PARENT_ID)
                            .from_tbl(PendingHierarchy::Table)
                            .from_col(PendingHierarchy::ParentId)
                            .to_tbl(Company::Table)
                            .to_col(Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PENDING_HIERARCHY_CHILD_ID)
                            .from_tbl(PendingHierarchy::Table)
                            .from_col(PendingHierarchy::ChildId)
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
            .drop_table(Table::drop().table(PendingHierarchy::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PendingHierarchy {
    Table,
    Id,
    ParentId,
    ChildId,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_company::Company;

static IDX_COMPANY_HIERARCHY_PARENT_CHILD: &str = "idx-company_hierarchy-parent_id-child_id";
static IDX_COMPANY_HIERARCHY_CHILD_ID: &str = "idx-company_hierarchy-child_id";
static FK_COMPANY_HIERARCHY_PARENT_ID: &str = "fk-company_hierarchy-parent_id";
static FK_COMPANY_HIERARCHY_CHILD_ID: &str = "fk-company_hierarchy-child_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyHierarchy::Table)
                    .if_not_exists()
                    .col(pk_auto(CompanyHierarchy::Id))
                    .col(integer(CompanyHierarchy::ParentId))
                    .col(integer(CompanyHierarchy::ChildId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMPANY_HIERARCHY_PARENT_ID)
                            .from_tbl(CompanyHierarchy::Table)
                            .from_col(CompanyHierarchy::ParentId)
                            .to_tbl(Company::Table)
                            .to_col(Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMPANY_HIERARCHY_CHILD_ID)
                            .from_tbl(CompanyHierarchy::Table)
                            .from_col(CompanyHierarchy::ChildId)
                            .to_tbl(Company::Table)
                            .to_col(Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Doubles as the lookup index for `parent_id = ?` traversal queries
        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPANY_HIERARCHY_PARENT_CHILD)
                    .table(CompanyHierarchy::Table)
                    .col(CompanyHierarchy::ParentId)
                    .col(CompanyHierarchy::ChildId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPANY_HIERARCHY_CHILD_ID)
                    .table(CompanyHierarchy::Table)
                    .col(CompanyHierarchy::ChildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPANY_HIERARCHY_CHILD_ID)
                    .table(CompanyHierarchy::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPANY_HIERARCHY_PARENT_CHILD)
                    .table(CompanyHierarchy::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CompanyHierarchy::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CompanyHierarchy {
    Table,
    Id,
    ParentId,
    ChildId,
}

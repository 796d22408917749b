//! `SeaORM` Entity for the pending_asset moderation queue

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pending_asset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning company name as typed by the submitter
    pub company_name: Option<String>,
    pub asset_name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for the company table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub vote_up: i64,
    pub vote_down: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::brand_asset::Entity")]
    BrandAsset,
    #[sea_orm(has_one = "super::company_region_vote::Entity")]
    CompanyRegionVote,
}

impl Related<super::brand_asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BrandAsset.def()
    }
}

impl Related<super::company_region_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyRegionVote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

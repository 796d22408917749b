pub use sea_orm_migration::prelude::*;

mod m20260101_000001_company;
mod m20260101_000002_company_hierarchy;
mod m20260101_000003_company_region_vote;
mod m20260101_000004_brand_asset;
mod m20260101_000005_pending_company;
mod m20260101_000006_pending_asset;
mod m20260101_000007_pending_hierarchy;
mod m20260101_000008_pending_vote;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_company::Migration),
            Box::new(m20260101_000002_company_hierarchy::Migration),
            Box::new(m20260101_000003_company_region_vote::Migration),
            Box::new(m20260101_000004_brand_asset::Migration),
            Box::new(m20260101_000005_pending_company::Migration),
            Box::new(m20260101_000006_pending_asset::Migration),
            Box::new(m20260101_000007_pending_hierarchy::Migration),
            Box::new(m20260101_000008_pending_vote::Migration),
        ]
    }
}

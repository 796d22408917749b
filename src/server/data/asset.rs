use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::data::MAX_IDS_PER_QUERY;

pub struct AssetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssetRepository<'a, C> {
    /// Creates a new instance of [`AssetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the brands/assets owned by any of the provided companies, ordered by name
    pub async fn get_by_company_ids(
        &self,
        company_ids: &[i32],
    ) -> Result<Vec<entity::brand_asset::Model>, DbErr> {
        if company_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut assets = Vec::new();
        for chunk in company_ids.chunks(MAX_IDS_PER_QUERY) {
            let batch = entity::prelude::BrandAsset::find()
                .filter(entity::brand_asset::Column::CompanyId.is_in(chunk.iter().copied()))
                .order_by_asc(entity::brand_asset::Column::Name)
                .all(self.db)
                .await?;
            assets.extend(batch);
        }
        // Each chunk is ordered on its own
        if company_ids.len() > MAX_IDS_PER_QUERY {
            assets.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(assets)
    }
}

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::data::MAX_IDS_PER_QUERY;

pub struct RegionalVoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegionalVoteRepository<'a, C> {
    /// Creates a new instance of [`RegionalVoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the regional vote record of a company, if one exists
    pub async fn get_by_company_id(
        &self,
        company_id: i32,
    ) -> Result<Option<entity::company_region_vote::Model>, DbErr> {
        entity::prelude::CompanyRegionVote::find()
            .filter(entity::company_region_vote::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_company_ids(
        &self,
        company_ids: &[i32],
    ) -> Result<Vec<entity::company_region_vote::Model>, DbErr> {
        if company_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for chunk in company_ids.chunks(MAX_IDS_PER_QUERY) {
            let batch = entity::prelude::CompanyRegionVote::find()
                .filter(
                    entity::company_region_vote::Column::CompanyId.is_in(chunk.iter().copied()),
                )
                .all(self.db)
                .await?;
            records.extend(batch);
        }

        Ok(records)
    }
}

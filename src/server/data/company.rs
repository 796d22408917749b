use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::data::MAX_IDS_PER_QUERY;

/// Escape character for LIKE patterns built from user input
const LIKE_ESCAPE: char = '!';

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    /// Creates a new instance of [`CompanyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        company_id: i32,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find_by_id(company_id)
            .one(self.db)
            .await
    }

    /// Gets all companies ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .order_by_asc(entity::company::Column::Name)
            .order_by_asc(entity::company::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the company whose name equals `name` ignoring case
    ///
    /// When several names match, the first by name then ID is returned.
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .filter(lower_name().eq(name.to_lowercase()))
            .order_by_asc(entity::company::Column::Name)
            .order_by_asc(entity::company::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets companies whose name contains `term` ignoring case, ordered by name
    ///
    /// `%` and `_` in the term match literally.
    pub async fn search_by_name(
        &self,
        term: &str,
        limit: Option<u64>,
    ) -> Result<Vec<entity::company::Model>, DbErr> {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

        entity::prelude::Company::find()
            .filter(lower_name().like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)))
            .order_by_asc(entity::company::Column::Name)
            .order_by_asc(entity::company::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        company_ids: &[i32],
    ) -> Result<Vec<entity::company::Model>, DbErr> {
        if company_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut companies = Vec::with_capacity(company_ids.len());
        for chunk in company_ids.chunks(MAX_IDS_PER_QUERY) {
            let batch = entity::prelude::Company::find()
                .filter(entity::company::Column::Id.is_in(chunk.iter().copied()))
                .all(self.db)
                .await?;
            companies.extend(batch);
        }
        companies.sort_by_key(|company| company.id);

        Ok(companies)
    }

    /// Gets the global vote counters for the provided companies
    ///
    /// Companies that don't exist are omitted from the result.
    ///
    /// # Returns
    /// Vector of `(company_id, vote_up, vote_down)` tuples
    pub async fn get_votes_by_ids(
        &self,
        company_ids: &[i32],
    ) -> Result<Vec<(i32, i64, i64)>, DbErr> {
        if company_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut votes = Vec::with_capacity(company_ids.len());
        for chunk in company_ids.chunks(MAX_IDS_PER_QUERY) {
            let batch = entity::prelude::Company::find()
                .select_only()
                .column(entity::company::Column::Id)
                .column(entity::company::Column::VoteUp)
                .column(entity::company::Column::VoteDown)
                .filter(entity::company::Column::Id.is_in(chunk.iter().copied()))
                .into_tuple::<(i32, i64, i64)>()
                .all(self.db)
                .await?;
            votes.extend(batch);
        }

        Ok(votes)
    }
}

fn lower_name() -> Expr {
    Expr::expr(Func::lower(Expr::col(entity::company::Column::Name)))
}

/// Escapes LIKE wildcards and the escape character so they match literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

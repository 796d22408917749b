//! Moderation queue repository.
//!
//! Submissions are only ever inserted here; promotion into the live tables happens
//! outside of this application.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Values stored for a pending vote
pub struct NewPendingVote<'v> {
    pub company_id: i32,
    pub vote_type: &'v str,
    pub voter_key: &'v str,
    pub vote_window: i64,
    pub country: Option<String>,
    pub region: Option<String>,
}

pub struct PendingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PendingRepository<'a, C> {
    /// Creates a new instance of [`PendingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_company(
        &self,
        company_name: String,
        country: Option<String>,
        region: Option<String>,
        parent_company_name: Option<String>,
        reason: Option<String>,
    ) -> Result<entity::pending_company::Model, DbErr> {
        let pending = entity::pending_company::ActiveModel {
            company_name: ActiveValue::Set(company_name),
            country: ActiveValue::Set(country),
            region: ActiveValue::Set(region),
            parent_company_name: ActiveValue::Set(parent_company_name),
            reason: ActiveValue::Set(reason),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pending.insert(self.db).await
    }

    pub async fn create_asset(
        &self,
        asset_name: String,
        company_name: Option<String>,
    ) -> Result<entity::pending_asset::Model, DbErr> {
        let pending = entity::pending_asset::ActiveModel {
            company_name: ActiveValue::Set(company_name),
            asset_name: ActiveValue::Set(asset_name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pending.insert(self.db).await
    }

    pub async fn create_hierarchy(
        &self,
        parent_id: i32,
        child_id: i32,
    ) -> Result<entity::pending_hierarchy::Model, DbErr> {
        let pending = entity::pending_hierarchy::ActiveModel {
            parent_id: ActiveValue::Set(parent_id),
            child_id: ActiveValue::Set(child_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pending.insert(self.db).await
    }

    /// Inserts a pending vote
    ///
    /// Fails with a unique constraint violation when the voter already has a vote for the
    /// company in the same window, see [`sea_orm::DbErr::sql_err`].
    pub async fn create_vote(
        &self,
        vote: NewPendingVote<'_>,
    ) -> Result<entity::pending_vote::Model, DbErr> {
        let pending = entity::pending_vote::ActiveModel {
            company_id: ActiveValue::Set(vote.company_id),
            vote_type: ActiveValue::Set(vote.vote_type.to_string()),
            voter_key: ActiveValue::Set(vote.voter_key.to_string()),
            vote_window: ActiveValue::Set(vote.vote_window),
            country: ActiveValue::Set(vote.country),
            region: ActiveValue::Set(vote.region),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pending.insert(self.db).await
    }
}

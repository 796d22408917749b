//! Vote submission.
//!
//! Votes are queued in `pending_vote` rather than applied to the live counters. A voter gets
//! one vote per company per 48 hour window, enforced by a unique index on the queue.

use std::net::IpAddr;

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::vote::VoteType,
    server::{
        data::{
            company::CompanyRepository,
            pending::{NewPendingVote, PendingRepository},
        },
        error::{company::CompanyError, vote::VoteError, Error},
        model::db::PendingVoteModel,
        service::geo::{GeoClient, GeoLocation},
        util::time::vote_window,
    },
};

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
    geo_client: Option<&'a GeoClient>,
}

impl<'a> VoteService<'a> {
    /// Creates a new instance of [`VoteService`]
    ///
    /// Without a geolocation client votes are recorded without a country or region.
    pub fn new(db: &'a DatabaseConnection, geo_client: Option<&'a GeoClient>) -> Self {
        Self { db, geo_client }
    }

    /// Records a vote for a company.
    ///
    /// # Arguments
    /// - `company_id` - ID of the company being voted on
    /// - `vote_type` - Up or down vote
    /// - `voter_key` - Identifies the voter, normally the client IP address
    ///
    /// # Returns
    /// - `Ok(PendingVoteModel)` - Vote queued for moderation
    /// - `Err(Error::CompanyError)` - Company does not exist
    /// - `Err(Error::VoteError(VoteError::AlreadyVoted))` - Voter already voted in this window
    /// - `Err(Error::VoteError(VoteError::Failed))` - Vote could not be stored
    pub async fn submit_vote(
        &self,
        company_id: i32,
        vote_type: VoteType,
        voter_key: &str,
    ) -> Result<PendingVoteModel, Error> {
        CompanyRepository::new(self.db)
            .get_by_id(company_id)
            .await?
            .ok_or(CompanyError::NotFound(company_id))?;

        let location = self.locate(voter_key).await;

        let vote = NewPendingVote {
            company_id,
            vote_type: vote_type.as_str(),
            voter_key,
            vote_window: vote_window(Utc::now()),
            country: location.country,
            region: location.region,
        };

        match PendingRepository::new(self.db).create_vote(vote).await {
            Ok(pending_vote) => {
                tracing::debug!(
                    company_id = %company_id,
                    vote_type = %vote_type.as_str(),
                    "Recorded pending vote"
                );

                Ok(pending_vote)
            }
            Err(err) if is_duplicate_vote(&err) => {
                Err(VoteError::AlreadyVoted { company_id }.into())
            }
            Err(source) => Err(VoteError::Failed { company_id, source }.into()),
        }
    }

    /// Looks up the voter's location, falling back to an unknown location on any failure
    async fn locate(&self, voter_key: &str) -> GeoLocation {
        let Some(geo_client) = self.geo_client else {
            return GeoLocation::default();
        };

        if voter_key.parse::<IpAddr>().is_err() {
            tracing::debug!("Skipping geolocation for non-IP voter key {}", voter_key);
            return GeoLocation::default();
        }

        match geo_client.lookup(voter_key).await {
            Ok(location) => location,
            Err(err) => {
                tracing::warn!(
                    "Geolocation lookup failed, recording vote without location: {}",
                    err
                );

                GeoLocation::default()
            }
        }
    }
}

fn is_duplicate_vote(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

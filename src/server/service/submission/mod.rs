//! Moderation queue submissions.
//!
//! Companies, brands/assets and parent relationships suggested by the public are validated,
//! normalised and queued in the pending tables for review.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::submission::{AssetSubmissionDto, CompanySubmissionDto, ParentSubmissionDto},
    server::{
        data::{company::CompanyRepository, pending::PendingRepository},
        error::{company::CompanyError, submission::SubmissionError, Error},
        model::db::{PendingAssetModel, PendingCompanyModel, PendingHierarchyModel},
        service::company::{ALL_REGIONS, GLOBAL_LOCATION},
    },
};

/// A company submission after trimming and location normalisation
#[derive(Debug, PartialEq, Eq)]
pub struct NormalizedCompany {
    pub company_name: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub parent_company_name: Option<String>,
    /// Explains which location fields the submitter left blank
    pub reason: Option<String>,
}

pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    /// Creates a new instance of [`SubmissionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Queues a new company for review.
    ///
    /// # Returns
    /// - `Ok(PendingCompanyModel)` - Queued submission
    /// - `Err(Error::SubmissionError)` - Company name is blank
    /// - `Err(Error::DbErr)` - Database insert failed
    pub async fn submit_company(
        &self,
        submission: CompanySubmissionDto,
    ) -> Result<PendingCompanyModel, Error> {
        let company = normalize_company(submission)?;

        let pending = PendingRepository::new(self.db)
            .create_company(
                company.company_name,
                company.country,
                company.region,
                company.parent_company_name,
                company.reason,
            )
            .await?;

        tracing::debug!("Queued company submission \"{}\"", pending.company_name);

        Ok(pending)
    }

    /// Queues a new brand/asset for review
    pub async fn submit_asset(
        &self,
        submission: AssetSubmissionDto,
    ) -> Result<PendingAssetModel, Error> {
        let asset_name = submission.asset_name.trim();
        if asset_name.is_empty() {
            return Err(SubmissionError::MissingAssetName.into());
        }

        let pending = PendingRepository::new(self.db)
            .create_asset(asset_name.to_string(), non_blank(submission.company_name))
            .await?;

        tracing::debug!("Queued asset submission \"{}\"", pending.asset_name);

        Ok(pending)
    }

    /// Queues a proposed parent for an existing company.
    ///
    /// The parent is matched by exact name, ignoring case and surrounding whitespace.
    ///
    /// # Arguments
    /// - `child_id` - ID of the company receiving a parent
    /// - `submission` - Name of the proposed parent
    ///
    /// # Returns
    /// - `Ok(PendingHierarchyModel)` - Queued relationship
    /// - `Err(Error::CompanyError)` - Child company does not exist
    /// - `Err(Error::SubmissionError)` - Name blank, no matching parent, or parent is the child
    /// - `Err(Error::DbErr)` - Database query or insert failed
    pub async fn submit_parent(
        &self,
        child_id: i32,
        submission: ParentSubmissionDto,
    ) -> Result<PendingHierarchyModel, Error> {
        let parent_name = submission.parent_name.trim();
        if parent_name.is_empty() {
            return Err(SubmissionError::MissingParentName.into());
        }

        let company_repo = CompanyRepository::new(self.db);

        company_repo
            .get_by_id(child_id)
            .await?
            .ok_or(CompanyError::NotFound(child_id))?;

        let parent = company_repo
            .find_by_name(parent_name)
            .await?
            .ok_or_else(|| SubmissionError::ParentNotFound(parent_name.to_string()))?;

        if parent.id == child_id {
            return Err(SubmissionError::SelfParent(child_id).into());
        }

        let pending = PendingRepository::new(self.db)
            .create_hierarchy(parent.id, child_id)
            .await?;

        tracing::debug!(
            "Queued parent submission: company ID {} -> company ID {}",
            parent.id,
            child_id
        );

        Ok(pending)
    }
}

/// Trims a company submission and derives its review reason.
///
/// A country of `global` in any case becomes `Global` with region `All`.
pub fn normalize_company(
    submission: CompanySubmissionDto,
) -> Result<NormalizedCompany, SubmissionError> {
    let company_name = submission.company_name.trim();
    if company_name.is_empty() {
        return Err(SubmissionError::MissingCompanyName);
    }

    let mut country = non_blank(submission.country);
    let mut region = non_blank(submission.region);

    if country
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case(GLOBAL_LOCATION))
    {
        country = Some(GLOBAL_LOCATION.to_string());
        region = Some(ALL_REGIONS.to_string());
    }

    let reason = missing_location_reason(country.is_none(), region.is_none());

    Ok(NormalizedCompany {
        company_name: company_name.to_string(),
        country,
        region,
        parent_company_name: non_blank(submission.parent_company_name),
        reason,
    })
}

fn missing_location_reason(missing_country: bool, missing_region: bool) -> Option<String> {
    let reason = match (missing_country, missing_region) {
        (true, true) => "Missing country and region",
        (true, false) => "Missing country",
        (false, true) => "Missing region",
        (false, false) => return None,
    };

    Some(reason.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

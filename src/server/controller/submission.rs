use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        submission::{AssetSubmissionDto, CompanySubmissionDto, ParentSubmissionDto},
    },
    server::{error::Error, model::app::AppState, service::submission::SubmissionService},
};

pub static SUBMISSION_TAG: &str = "submission";

/// Submit a new company for review
#[utoipa::path(
    post,
    path = "/api/submissions/company",
    tag = SUBMISSION_TAG,
    request_body = CompanySubmissionDto,
    responses(
        (status = 201, description = "Company queued for review", body = MessageDto),
        (status = 400, description = "Company name missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_company(
    State(state): State<AppState>,
    Json(submission): Json<CompanySubmissionDto>,
) -> Result<impl IntoResponse, Error> {
    let pending = SubmissionService::new(&state.db)
        .submit_company(submission)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: format!(
                "Thanks! \"{}\" has been submitted for review.",
                pending.company_name
            ),
        }),
    ))
}

/// Submit a new brand/asset for review
#[utoipa::path(
    post,
    path = "/api/submissions/asset",
    tag = SUBMISSION_TAG,
    request_body = AssetSubmissionDto,
    responses(
        (status = 201, description = "Brand/asset queued for review", body = MessageDto),
        (status = 400, description = "Brand/asset name missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_asset(
    State(state): State<AppState>,
    Json(submission): Json<AssetSubmissionDto>,
) -> Result<impl IntoResponse, Error> {
    let pending = SubmissionService::new(&state.db)
        .submit_asset(submission)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: format!(
                "Thanks! \"{}\" has been submitted as a brand/asset for review.",
                pending.asset_name
            ),
        }),
    ))
}

/// Propose a parent company for an existing company
#[utoipa::path(
    post,
    path = "/api/companies/{id}/parent",
    tag = SUBMISSION_TAG,
    params(("id" = i32, Path, description = "ID of the child company")),
    request_body = ParentSubmissionDto,
    responses(
        (status = 201, description = "Parent relationship queued for review", body = MessageDto),
        (status = 400, description = "Parent name missing, unknown, or the company itself", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_parent(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
    Json(submission): Json<ParentSubmissionDto>,
) -> Result<impl IntoResponse, Error> {
    SubmissionService::new(&state.db)
        .submit_parent(company_id, submission)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Thanks! The parent company has been submitted for review.".to_string(),
        }),
    ))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        company::{CompanyDetailDto, CompanySummaryDto, SearchQuery, SuggestQuery},
        hierarchy::{DescendantsDto, HierarchyRelationsDto, VoteAggregateDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{company::CompanyService, search::SearchService},
    },
};

pub static COMPANY_TAG: &str = "company";

/// Suggestions returned when the request doesn't specify a limit
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// List every company with its brands
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "All companies ordered by name", body = Vec<CompanySummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let companies = SearchService::new(&state.db).list_companies().await?;

    Ok((StatusCode::OK, Json(companies)))
}

/// Search companies by name, exact matches first
#[utoipa::path(
    get,
    path = "/api/companies/search",
    tag = COMPANY_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching companies, empty for a blank term", body = Vec<CompanySummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_companies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let term = query.q.unwrap_or_default();
    let companies = SearchService::new(&state.db).search(&term).await?;

    Ok((StatusCode::OK, Json(companies)))
}

/// Suggest company names for autocompletion
#[utoipa::path(
    get,
    path = "/api/companies/suggest",
    tag = COMPANY_TAG,
    params(SuggestQuery),
    responses(
        (status = 200, description = "Company names containing the term", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn suggest_companies(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Result<impl IntoResponse, Error> {
    let term = query.q.unwrap_or_default();
    let limit = query.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);

    let names = SearchService::new(&state.db)
        .suggest_names(&term, limit)
        .await?;

    Ok((StatusCode::OK, Json(names)))
}

/// Get a company with its brands and rolled-up votes
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company detail", body = CompanyDetailDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 422, description = "Company hierarchy contains a cycle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let company = CompanyService::new(&state.db).get_company(company_id).await?;

    Ok((StatusCode::OK, Json(company)))
}

/// Get vote figures for a company and everything beneath it
#[utoipa::path(
    get,
    path = "/api/companies/{id}/votes",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Vote aggregate", body = VoteAggregateDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 422, description = "Company hierarchy contains a cycle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company_votes(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let votes = CompanyService::new(&state.db).get_votes(company_id).await?;

    Ok((StatusCode::OK, Json(votes)))
}

/// Get the IDs of every company beneath a company
#[utoipa::path(
    get,
    path = "/api/companies/{id}/descendants",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Descendant IDs in depth-first order", body = DescendantsDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 422, description = "Company hierarchy contains a cycle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company_descendants(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let descendants = CompanyService::new(&state.db)
        .get_descendants(company_id)
        .await?;

    Ok((StatusCode::OK, Json(descendants)))
}

/// Get the direct parents and children of a company
#[utoipa::path(
    get,
    path = "/api/companies/{id}/hierarchy",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Parents and children with their ranks", body = HierarchyRelationsDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company_hierarchy(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let relations = CompanyService::new(&state.db)
        .get_relations(company_id)
        .await?;

    Ok((StatusCode::OK, Json(relations)))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use maxranked::{
    model::{
        api::ErrorDto,
        company::{CompanyDetailDto, CompanySummaryDto, SearchQuery, SuggestQuery},
        hierarchy::{DescendantsDto, HierarchyRelationsDto, VoteAggregateDto},
    },
    server::controller::company::{
        get_company, get_company_descendants, get_company_hierarchy, get_company_votes,
        list_companies, search_companies, suggest_companies,
    },
};

use super::*;

async fn holding_setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_company_tables()
        .with_mock_company(1, "Acme Holdings", 6, 2)
        .with_mock_company(2, "Acme", 3, 1)
        .with_mock_company(3, "Acme Foods", 1, 0)
        .with_hierarchy_edge(1, 2)
        .with_hierarchy_edge(2, 3)
        .with_asset(2, "Roadrunner Traps")
        .build()
        .await
}

/// Expect 200 with every company and its brands
#[tokio::test]
async fn lists_companies() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = list_companies(State(test.to_app_state())).await;
    let (status, companies): (_, Vec<CompanySummaryDto>) =
        read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(companies.len(), 3);
    assert_eq!(companies[0].name, "Acme");
    assert_eq!(companies[0].brands, vec!["Roadrunner Traps"]);

    Ok(())
}

/// Expect 200 with the exact match ahead of partial matches
#[tokio::test]
async fn searches_companies() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = search_companies(
        State(test.to_app_state()),
        Query(SearchQuery {
            q: Some("ACME".to_string()),
        }),
    )
    .await;
    let (status, companies): (_, Vec<CompanySummaryDto>) =
        read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Acme", "Acme Foods", "Acme Holdings"]);

    Ok(())
}

/// Expect 200 with an empty list when no term is provided
#[tokio::test]
async fn search_without_term_is_empty() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = search_companies(State(test.to_app_state()), Query(SearchQuery { q: None })).await;
    let (status, companies): (_, Vec<CompanySummaryDto>) =
        read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(companies.is_empty());

    Ok(())
}

/// Expect the default limit to apply when none is provided
#[tokio::test]
async fn suggests_names() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = suggest_companies(
        State(test.to_app_state()),
        Query(SuggestQuery {
            q: Some("foods".to_string()),
            limit: None,
        }),
    )
    .await;
    let (status, names): (_, Vec<String>) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names, vec!["Acme Foods"]);

    Ok(())
}

/// Expect 200 with votes rolled up from every descendant
#[tokio::test]
async fn gets_company_detail() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = get_company(State(test.to_app_state()), Path(1)).await;
    let (status, company): (_, CompanyDetailDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(company.location, "Global");
    assert_eq!(company.votes.total_up, 10);
    assert_eq!(company.votes.total_down, 3);
    assert_eq!(company.votes.rank_percentage, "76.9");
    assert_eq!(company.votes.descendant_count, 2);

    Ok(())
}

/// Expect 404 with an error body for an unknown company
#[tokio::test]
async fn company_not_found() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = get_company(State(test.to_app_state()), Path(99)).await;
    let (status, body): (_, ErrorDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "Company not found");

    Ok(())
}

#[tokio::test]
async fn gets_company_votes() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = get_company_votes(State(test.to_app_state()), Path(2)).await;
    let (status, votes): (_, VoteAggregateDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(votes.own.up, 3);
    assert_eq!(votes.children.up, 1);
    assert_eq!(votes.total_up, 4);
    assert_eq!(votes.rank_percentage, "80.0");

    Ok(())
}

#[tokio::test]
async fn gets_company_descendants() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = get_company_descendants(State(test.to_app_state()), Path(1)).await;
    let (status, descendants): (_, DescendantsDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(descendants.descendants, vec![2, 3]);

    Ok(())
}

/// Expect 422 when the hierarchy below a company loops back on itself
#[tokio::test]
async fn cyclic_hierarchy_is_unprocessable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company(1, "Ouroboros", 0, 0)
        .with_mock_company(2, "Tail", 0, 0)
        .with_hierarchy_edge(1, 2)
        .with_hierarchy_edge(2, 1)
        .build()
        .await?;

    let result = get_company_votes(State(test.to_app_state()), Path(1)).await;
    let (status, _): (_, ErrorDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn gets_company_hierarchy() -> Result<(), TestError> {
    let test = holding_setup().await?;

    let result = get_company_hierarchy(State(test.to_app_state()), Path(2)).await;
    let (status, relations): (_, HierarchyRelationsDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(relations.parents[0].id, 1);
    assert_eq!(relations.parents[0].rank_label, "75%");
    assert_eq!(relations.children[0].id, 3);
    assert_eq!(relations.children[0].rank_label, "100%");

    Ok(())
}

/// Expect 500 with a generic message when the database is unusable
#[tokio::test]
async fn database_error_is_internal() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_companies(State(test.to_app_state())).await;
    let (status, body): (_, ErrorDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Internal server error");

    Ok(())
}

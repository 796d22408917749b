use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use maxranked::{
    model::{
        api::{ErrorDto, MessageDto},
        submission::{AssetSubmissionDto, CompanySubmissionDto, ParentSubmissionDto},
    },
    server::controller::submission::{submit_asset, submit_company, submit_parent},
};

use super::*;

/// Expect 201 quoting the trimmed company name
#[tokio::test]
async fn submits_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_submission_tables().build().await?;

    let result = submit_company(
        State(test.to_app_state()),
        Json(CompanySubmissionDto {
            company_name: " Initech ".to_string(),
            country: Some("Canada".to_string()),
            region: None,
            parent_company_name: None,
        }),
    )
    .await;
    let (status, body): (_, MessageDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.message, "Thanks! \"Initech\" has been submitted for review.");

    Ok(())
}

/// Expect 400 with the validation message for a blank company name
#[tokio::test]
async fn rejects_blank_company_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_submission_tables().build().await?;

    let result = submit_company(
        State(test.to_app_state()),
        Json(CompanySubmissionDto::default()),
    )
    .await;
    let (status, body): (_, ErrorDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "Company name is required");

    Ok(())
}

#[tokio::test]
async fn submits_asset() -> Result<(), TestError> {
    let test = TestBuilder::new().with_submission_tables().build().await?;

    let result = submit_asset(
        State(test.to_app_state()),
        Json(AssetSubmissionDto {
            asset_name: "Red Stapler".to_string(),
            company_name: Some("Initech".to_string()),
        }),
    )
    .await;
    let (status, body): (_, MessageDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body.message,
        "Thanks! \"Red Stapler\" has been submitted as a brand/asset for review."
    );

    Ok(())
}

#[tokio::test]
async fn submits_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(1, "Umbrella Corp", 0, 0)
        .with_mock_company(2, "Umbrella Pharma", 0, 0)
        .build()
        .await?;

    let result = submit_parent(
        State(test.to_app_state()),
        Path(2),
        Json(ParentSubmissionDto {
            parent_name: "umbrella corp".to_string(),
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 when no company matches the parent name
#[tokio::test]
async fn rejects_unknown_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(2, "Umbrella Pharma", 0, 0)
        .build()
        .await?;

    let result = submit_parent(
        State(test.to_app_state()),
        Path(2),
        Json(ParentSubmissionDto {
            parent_name: "Umbrella Corp".to_string(),
        }),
    )
    .await;
    let (status, body): (_, ErrorDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "No matching company found for that name");

    Ok(())
}

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    Json,
};
use maxranked::{
    model::{
        api::{ErrorDto, MessageDto},
        vote::VoteRequestDto,
    },
    server::controller::vote::submit_vote,
};
use maxranked_test_utils::constant::{TEST_COUNTRY, TEST_REGION, TEST_VOTER_KEY};

use super::*;

fn peer() -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([203, 0, 113, 7], 40000)))
}

fn vote(vote_type: &str) -> Json<VoteRequestDto> {
    Json(VoteRequestDto {
        vote_type: vote_type.to_string(),
    })
}

fn up_vote() -> Json<VoteRequestDto> {
    vote("up")
}

fn forwarded_for(ip: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(ip));
    headers
}

/// Expect 201 with a thank you message
#[tokio::test]
async fn records_vote() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(1, "Acme", 0, 0)
        .build()
        .await?;

    let result = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        HeaderMap::new(),
        up_vote(),
    )
    .await;
    let (status, body): (_, MessageDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.message, "Vote recorded! Thank you!");

    Ok(())
}

/// Expect 409 for a second vote from the same address within the window
#[tokio::test]
async fn rejects_repeat_vote() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(1, "Acme", 0, 0)
        .build()
        .await?;

    let first = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        HeaderMap::new(),
        up_vote(),
    )
    .await;
    let second = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        HeaderMap::new(),
        vote("down"),
    )
    .await;

    assert_eq!(into_response(first).status(), StatusCode::CREATED);
    let (status, body): (_, ErrorDto) = read_json(into_response(second)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body.error,
        "You've already voted for this company in the last 48 hours!"
    );

    Ok(())
}

/// Expect a forwarded client address to be treated as a distinct voter from the proxy
#[tokio::test]
async fn identifies_voter_by_forwarded_address() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(1, "Acme", 0, 0)
        .build()
        .await?;

    let direct = submit_vote(
        State(test.to_app_state_trusting_proxy()),
        Path(1),
        peer(),
        HeaderMap::new(),
        up_vote(),
    )
    .await;
    let proxied = submit_vote(
        State(test.to_app_state_trusting_proxy()),
        Path(1),
        peer(),
        forwarded_for("198.51.100.23"),
        up_vote(),
    )
    .await;

    assert_eq!(into_response(direct).status(), StatusCode::CREATED);
    assert_eq!(into_response(proxied).status(), StatusCode::CREATED);

    Ok(())
}

/// Expect a changing X-Forwarded-For header not to grant extra votes when forwarding isn't trusted
#[tokio::test]
async fn ignores_untrusted_forwarded_address() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(1, "Acme", 0, 0)
        .build()
        .await?;

    let first = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        forwarded_for("10.9.9.0"),
        up_vote(),
    )
    .await;
    let second = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        forwarded_for("10.9.9.1"),
        up_vote(),
    )
    .await;
    let third = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        forwarded_for("10.9.9.2"),
        up_vote(),
    )
    .await;

    assert_eq!(into_response(first).status(), StatusCode::CREATED);
    assert_eq!(into_response(second).status(), StatusCode::CONFLICT);
    assert_eq!(into_response(third).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 with a JSON error body for a vote type other than up or down
#[tokio::test]
async fn rejects_unknown_vote_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(1, "Acme", 0, 0)
        .build()
        .await?;

    let result = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        HeaderMap::new(),
        vote("sideways"),
    )
    .await;
    let (status, body): (_, ErrorDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "Vote type must be \"up\" or \"down\"");

    // Nothing is stored, so a valid vote from the same address still goes through
    let valid = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        HeaderMap::new(),
        up_vote(),
    )
    .await;
    assert_eq!(into_response(valid).status(), StatusCode::CREATED);

    Ok(())
}

/// Expect a missing vote type to be rejected the same way
#[tokio::test]
async fn rejects_missing_vote_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(1, "Acme", 0, 0)
        .build()
        .await?;

    let request: VoteRequestDto = serde_json::from_str("{}").expect("Failed to parse request");
    let result = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        HeaderMap::new(),
        Json(request),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the voter's location to be looked up when geolocation is configured
#[tokio::test]
async fn looks_up_voter_location() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .with_mock_company(1, "Acme", 0, 0)
        .with_geo_endpoint(TEST_VOTER_KEY, Some(TEST_COUNTRY), Some(TEST_REGION), 1)
        .build()
        .await?;

    let result = submit_vote(
        State(test.to_app_state_with_geo()),
        Path(1),
        peer(),
        HeaderMap::new(),
        up_vote(),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::CREATED);
    test.assert_mocks();

    Ok(())
}

/// Expect 404 when voting for an unknown company
#[tokio::test]
async fn vote_for_missing_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_submission_tables().build().await?;

    let result = submit_vote(
        State(test.to_app_state()),
        Path(5),
        peer(),
        HeaderMap::new(),
        up_vote(),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 with the retry message when the vote can't be stored
#[tokio::test]
async fn vote_storage_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company(1, "Acme", 0, 0)
        .build()
        .await?;

    let result = submit_vote(
        State(test.to_app_state()),
        Path(1),
        peer(),
        HeaderMap::new(),
        up_vote(),
    )
    .await;
    let (status, body): (_, ErrorDto) = read_json(into_response(result)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Vote failed - please try again");

    Ok(())
}

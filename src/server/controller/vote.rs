use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        vote::{VoteRequestDto, VoteType},
    },
    server::{
        controller::util::voter::voter_key,
        error::{vote::VoteError, Error},
        model::app::AppState,
        service::vote::VoteService,
    },
};

pub static VOTE_TAG: &str = "vote";

/// Vote a company up or down
///
/// Each voter, identified by IP address, may vote once per company every 48 hours. The address
/// comes from `X-Forwarded-For` only when the server is configured to trust it.
#[utoipa::path(
    post,
    path = "/api/companies/{id}/vote",
    tag = VOTE_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    request_body = VoteRequestDto,
    responses(
        (status = 201, description = "Vote recorded", body = MessageDto),
        (status = 400, description = "Vote type is not \"up\" or \"down\"", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 409, description = "Already voted for this company in the last 48 hours", body = ErrorDto),
        (status = 500, description = "Vote failed", body = ErrorDto)
    ),
)]
pub async fn submit_vote(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(request): Json<VoteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let vote_type = VoteType::from_name(&request.vote_type)
        .ok_or(VoteError::InvalidVoteType(request.vote_type))?;
    let voter_key = voter_key(&headers, peer, state.trust_forwarded_for);

    VoteService::new(&state.db, state.geo_client.as_ref())
        .submit_vote(company_id, vote_type, &voter_key)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Vote recorded! Thank you!".to_string(),
        }),
    ))
}

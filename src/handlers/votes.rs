use axum::{extract::State, http::StatusCode, response::Json};

use crate::{
    AppState,
    error::{AppJson, AppPath, Result, parse_id},
    models::{VotePayload, VoteRecord},
    services::vote_service,
};

pub async fn create_vote(
    State(state): State<AppState>,
    AppJson(payload): AppJson<VotePayload>,
) -> Result<(StatusCode, Json<VoteRecord>)> {
    let (product_id, voter_id) = payload.into_ids()?;

    let vote = vote_service::record_vote(&state.db, product_id, voter_id).await?;
    tracing::info!(voter_id, product_id, vote_id = vote.id, "Vote registered");

    Ok((StatusCode::CREATED, Json(vote)))
}

pub async fn list_votes_by_voter(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> Result<Json<Vec<VoteRecord>>> {
    let voter_id = parse_id(&raw_id, "id_votante")?;

    let votes = vote_service::list_votes_by_voter(&state.db, voter_id).await?;
    if votes.is_empty() {
        tracing::info!(voter_id, "Voter has no votes");
    } else {
        tracing::info!(voter_id, count = votes.len(), "Listed votes");
    }

    Ok(Json(votes))
}

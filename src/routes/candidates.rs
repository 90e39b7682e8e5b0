use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::candidate_dto::{CandidateResponse, CreateCandidatePayload, UpdateCandidatePayload},
    dto::job_dto::ListQuery,
    error::{Error, Result},
    middleware::auth::Claims,
    policy::{self, Actor},
    AppState,
};

pub async fn list_candidates(
    State(state): State<AppState>,
    claims: Claims,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CandidateResponse>>> {
    let actor = Actor::try_from(&claims)?;
    policy::require_admin(&actor)?;
    let (skip, limit) = query.bounds();
    let candidates = state.candidate_service.list(skip, limit).await?;
    Ok(Json(
        candidates.into_iter().map(CandidateResponse::from).collect(),
    ))
}

pub async fn get_candidate(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateResponse>> {
    let actor = Actor::try_from(&claims)?;
    let candidate = state
        .candidate_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
    policy::require_self_or_admin(&actor, candidate.user_id)?;
    Ok(Json(CandidateResponse::from(candidate)))
}

/// Public: applying to the platform creates the account and the profile.
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(CandidateResponse::from(candidate))))
}

pub async fn update_candidate(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCandidatePayload>,
) -> Result<Json<CandidateResponse>> {
    let actor = Actor::try_from(&claims)?;
    payload.validate()?;
    let candidate = state
        .candidate_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
    policy::require_self_or_admin(&actor, candidate.user_id)?;
    let updated = state.candidate_service.update(id, payload).await?;
    Ok(Json(CandidateResponse::from(updated)))
}

pub async fn delete_candidate(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let actor = Actor::try_from(&claims)?;
    policy::require_admin(&actor)?;
    state.candidate_service.delete(id).await?;
    Ok(Json(
        serde_json::json!({ "detail": "Candidate deleted successfully" }),
    ))
}

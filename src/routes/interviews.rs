use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::interview_dto::{CreateInterviewPayload, InterviewResponse, UpdateInterviewPayload},
    dto::job_dto::ListQuery,
    error::{Error, Result},
    middleware::auth::Claims,
    models::interview::InterviewSummary,
    policy::{self, Actor},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/interviews",
    responses(
        (status = 201, description = "Interview scheduled"),
        (status = 403, description = "Not allowed for this candidate"),
        (status = 404, description = "Candidate or job not found")
    )
)]
pub async fn create_interview(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateInterviewPayload>,
) -> Result<impl IntoResponse> {
    let actor = Actor::try_from(&claims)?;
    payload.validate()?;
    payload.check_status()?;

    let candidate_user_id = state
        .interview_service
        .candidate_owner(payload.candidate_id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
    policy::can_create_interview(&actor, candidate_user_id)?;

    let interview = state.interview_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(InterviewResponse::from(interview))))
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}",
    params(("id" = Uuid, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "Interview detail"),
        (status = 403, description = "Not the owning candidate or company"),
        (status = 404, description = "Interview not found")
    )
)]
pub async fn get_interview(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewResponse>> {
    let actor = Actor::try_from(&claims)?;
    let found = state
        .interview_service
        .get_with_owners(id)
        .await?
        .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;
    policy::can_view_interview(&actor, found.candidate_user_id, found.job_company_id)?;
    Ok(Json(InterviewResponse::from(found.interview)))
}

pub async fn update_interview(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewPayload>,
) -> Result<Json<InterviewResponse>> {
    let actor = Actor::try_from(&claims)?;
    policy::require_admin(&actor)?;
    payload.validate()?;
    payload.check_status()?;
    let interview = state.interview_service.update(id, payload).await?;
    Ok(Json(InterviewResponse::from(interview)))
}

pub async fn delete_interview(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let actor = Actor::try_from(&claims)?;
    policy::require_admin(&actor)?;
    state.interview_service.delete(id).await?;
    Ok(Json(
        serde_json::json!({ "detail": "Interview deleted successfully" }),
    ))
}

/// Interview summaries for one candidate; only that candidate or an admin.
pub async fn candidate_interviews(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(candidate_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<InterviewSummary>>> {
    let actor = Actor::try_from(&claims)?;
    let owner = state
        .interview_service
        .candidate_owner(candidate_id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
    policy::require_self_or_admin(&actor, owner)?;

    let (skip, limit) = query.bounds();
    let summaries = state
        .interview_service
        .list_by_candidate(candidate_id, skip, limit)
        .await?;
    Ok(Json(summaries))
}

/// All interviews for jobs owned by the calling company.
pub async fn company_interviews(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<InterviewResponse>>> {
    let actor = Actor::try_from(&claims)?;
    let company_id = policy::require_company(&actor)?;
    let (skip, limit) = query.bounds();
    let interviews = state
        .interview_service
        .list_by_company(company_id, skip, limit)
        .await?;
    Ok(Json(
        interviews.into_iter().map(InterviewResponse::from).collect(),
    ))
}

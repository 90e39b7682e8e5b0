use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{CreateJobPayload, JobResponse, ListQuery, UpdateJobPayload},
    error::{Error, Result},
    middleware::auth::Claims,
    policy::{self, Actor},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Job listing")
    )
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<JobResponse>>> {
    let (skip, limit) = query.bounds();
    let jobs = state.job_service.list(skip, limit).await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobResponse>> {
    let job = state
        .job_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    responses(
        (status = 201, description = "Job created"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_job(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    let actor = Actor::try_from(&claims)?;
    policy::require_admin(&actor)?;
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

pub async fn update_job(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<Json<JobResponse>> {
    let actor = Actor::try_from(&claims)?;
    policy::require_admin(&actor)?;
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(JobResponse::from(job)))
}

pub async fn delete_job(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let actor = Actor::try_from(&claims)?;
    policy::require_admin(&actor)?;
    state.job_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "detail": "Job deleted successfully" })))
}

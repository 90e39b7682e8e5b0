pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;

use crate::services::{
    auth_service::AuthService, candidate_service::CandidateService,
    company_service::CompanyService, interview_service::InterviewService, job_service::JobService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth_service: AuthService,
    pub candidate_service: CandidateService,
    pub job_service: JobService,
    pub interview_service: InterviewService,
    pub company_service: CompanyService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let auth_service = AuthService::new(pool.clone());
        let candidate_service = CandidateService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let interview_service = InterviewService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());

        Self {
            pool,
            auth_service,
            candidate_service,
            job_service,
            interview_service,
            company_service,
        }
    }
}

/// Full application router. Handlers on mixed public/protected paths pull
/// claims through the extractor; interview and company routes sit behind the
/// bearer middleware outright.
pub fn app_router(state: AppState) -> Router {
    let open_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        .route(
            "/api/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route(
            "/api/jobs/:id",
            get(routes::jobs::get_job)
                .put(routes::jobs::update_job)
                .delete(routes::jobs::delete_job),
        )
        .route(
            "/api/candidates",
            get(routes::candidates::list_candidates).post(routes::candidates::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidates::get_candidate)
                .put(routes::candidates::update_candidate)
                .delete(routes::candidates::delete_candidate),
        );

    let bearer_api = Router::new()
        .route(
            "/api/auth/validate-token",
            get(routes::auth::validate_token),
        )
        .route("/api/interviews", post(routes::interviews::create_interview))
        .route(
            "/api/interviews/company",
            get(routes::interviews::company_interviews),
        )
        .route(
            "/api/interviews/:id",
            get(routes::interviews::get_interview)
                .put(routes::interviews::update_interview)
                .delete(routes::interviews::delete_interview),
        )
        .route(
            "/api/interviews/candidates/:candidate_id",
            get(routes::interviews::candidate_interviews),
        )
        .route("/api/company/me", get(routes::company::company_me))
        .route(
            "/api/company/candidates/passed",
            get(routes::company::passed_candidates),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth,
        ));

    open_api.merge(bearer_api).with_state(state)
}

use axum::{extract::State, Extension, Json};

use crate::{
    dto::company_dto::{CompanyResponse, PassedCandidateResponse},
    error::{Error, Result},
    middleware::auth::Claims,
    policy::{self, Actor},
    AppState,
};

pub async fn company_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<CompanyResponse>> {
    let actor = Actor::try_from(&claims)?;
    let company_id = policy::require_company(&actor)?;
    let company = state
        .company_service
        .get(company_id)
        .await?
        .ok_or_else(|| Error::NotFound("Company not found".to_string()))?;
    Ok(Json(CompanyResponse::from(company)))
}

/// De-duplicated set of candidates who passed any of this company's
/// interviews; a candidate passing several job offers appears once.
pub async fn passed_candidates(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<PassedCandidateResponse>>> {
    let actor = Actor::try_from(&claims)?;
    let company_id = policy::require_company(&actor)?;
    let candidates = state.company_service.passed_candidates(company_id).await?;
    Ok(Json(
        candidates
            .into_iter()
            .map(PassedCandidateResponse::from)
            .collect(),
    ))
}

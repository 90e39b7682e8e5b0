use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    dto::auth_dto::{
        LoginPayload, LoginResponse, RegisterPayload, UserResponse, ValidateTokenResponse,
    },
    error::Result,
    middleware::auth::Claims,
    utils::token,
    AppState,
};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.auth_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>> {
    payload.validate()?;
    let user = state
        .auth_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let config = crate::config::get_config();
    let access_token = token::issue_access_token(
        &config.jwt_secret,
        config.token_ttl_minutes,
        user.id,
        &user.role,
        user.company_id,
    )?;

    Ok(Json(LoginResponse {
        access_token,
        user: UserResponse::from(user),
    }))
}

/// The bearer middleware has already vetted the token by the time this runs;
/// an invalid or expired token never reaches here.
pub async fn validate_token(_claims: Claims) -> Json<ValidateTokenResponse> {
    Json(ValidateTokenResponse { valid: true })
}

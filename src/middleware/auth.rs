use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,
}

pub fn decode_bearer(headers: &HeaderMap) -> Result<Claims, Error> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Err(Error::Unauthorized(
            "Missing authorization header".to_string(),
        ));
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err(Error::Unauthorized(
            "Malformed authorization header".to_string(),
        ));
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(Error::Unauthorized(
            "Unsupported authorization scheme".to_string(),
        ));
    };

    let config = crate::config::get_config();
    crate::utils::token::decode_access_token(&config.jwt_secret, token)
}

/// Rejects requests without a valid bearer token and attaches the decoded
/// claims to the request extensions.
pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    match decode_bearer(req.headers()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}

/// Claims can be taken straight as a handler argument. Middleware-attached
/// claims win; otherwise the Authorization header is decoded on the spot, so
/// protected handlers can share a path with public ones.
#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(claims.clone());
        }
        decode_bearer(&parts.headers)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::CandidateProfile;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
}

/// Status is deliberately absent: it only moves through interview outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCandidatePayload {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<CandidateProfile> for CandidateResponse {
    fn from(p: CandidateProfile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            email: p.email,
            full_name: p.full_name,
            phone: p.phone,
            resume_url: p.resume_url,
            status: p.status,
            created_at: p.created_at,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::company::{Company, PassedCandidate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassedCandidateResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub best_score: Option<i32>,
    pub last_interview: Option<DateTime<Utc>>,
    pub status: String,
}

impl From<PassedCandidate> for PassedCandidateResponse {
    fn from(c: PassedCandidate) -> Self {
        Self {
            id: c.id,
            email: c.email,
            full_name: c.full_name,
            phone: c.phone,
            resume_url: c.resume_url,
            best_score: c.best_score,
            last_interview: c.last_interview,
            status: "passed".to_string(),
        }
    }
}

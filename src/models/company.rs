use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the company-scoped "passed candidates" aggregation. A candidate
/// appears once no matter how many of the company's interviews they passed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PassedCandidate {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub best_score: Option<i32>,
    pub last_interview: Option<DateTime<Utc>>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Candidate statuses: applied -> interviewed -> passed | rejected.
/// Transitions happen only through interview outcomes, never by direct edits.
pub mod status {
    pub const APPLIED: &str = "applied";
    pub const INTERVIEWED: &str = "interviewed";
    pub const PASSED: &str = "passed";
    pub const REJECTED: &str = "rejected";
}

/// Candidate joined with the public fields of its owning user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

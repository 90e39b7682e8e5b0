use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub mod status {
    pub const SCHEDULED: &str = "scheduled";
    pub const COMPLETED: &str = "completed";
    pub const PASSED: &str = "passed";
    pub const FAILED: &str = "failed";

    pub const ALL: [&str; 4] = [SCHEDULED, COMPLETED, PASSED, FAILED];
}

/// Report generation is an external integration: the `report_*` and
/// `conversation_id` columns are written by that system, never produced here.
pub mod report_status {
    pub const PROCESSING: &str = "processing";
    pub const COMPLETE: &str = "complete";
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub date: DateTime<Utc>,
    pub status: String,
    pub feedback: Option<String>,
    pub score: Option<i32>,
    pub conversation_id: Option<String>,
    pub report_id: Option<String>,
    pub report_status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Interview plus the ownership facts authorization needs: the candidate's
/// owning user and the job's owning company.
#[derive(Debug, Clone, FromRow)]
pub struct InterviewWithOwners {
    #[sqlx(flatten)]
    pub interview: Interview,
    pub candidate_user_id: Uuid,
    pub job_company_id: Uuid,
}

/// Candidate-facing listing row with job context joined in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewSummary {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub status: String,
    pub job_title: String,
    pub company: String,
}

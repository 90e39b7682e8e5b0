use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::interview::{status, Interview};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInterviewPayload {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    status::SCHEDULED.to_string()
}

impl CreateInterviewPayload {
    pub fn check_status(&self) -> crate::error::Result<()> {
        if status::ALL.contains(&self.status.as_str()) {
            Ok(())
        } else {
            Err(crate::error::Error::BadRequest(format!(
                "Unknown interview status: {}",
                self.status
            )))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateInterviewPayload {
    pub date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub feedback: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub score: Option<i32>,
}

impl UpdateInterviewPayload {
    pub fn check_status(&self) -> crate::error::Result<()> {
        match self.status.as_deref() {
            None => Ok(()),
            Some(s) if status::ALL.contains(&s) => Ok(()),
            Some(s) => Err(crate::error::Error::BadRequest(format!(
                "Unknown interview status: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResponse {
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

impl From<Interview> for InterviewResponse {
    fn from(i: Interview) -> Self {
        Self {
            id: i.id,
            candidate_id: i.candidate_id,
            job_id: i.job_id,
            date: i.date,
            status: i.status,
            feedback: i.feedback,
            score: i.score,
            conversation_id: i.conversation_id,
            report_id: i.report_id,
            report_status: i.report_status,
            created_at: i.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_defaults_to_scheduled() {
        let payload: CreateInterviewPayload = serde_json::from_value(serde_json::json!({
            "candidate_id": Uuid::new_v4(),
            "job_id": Uuid::new_v4(),
            "date": "2026-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(payload.status, status::SCHEDULED);
        assert!(payload.check_status().is_ok());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let payload: CreateInterviewPayload = serde_json::from_value(serde_json::json!({
            "candidate_id": Uuid::new_v4(),
            "job_id": Uuid::new_v4(),
            "date": "2026-03-01T10:00:00Z",
            "status": "ghosted"
        }))
        .unwrap();
        assert!(payload.check_status().is_err());
    }

    #[test]
    fn response_preserves_submitted_fields() {
        let interview = Interview {
            id: Uuid::new_v4(),
            candidate_id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            date: Utc::now(),
            status: status::SCHEDULED.to_string(),
            feedback: None,
            score: None,
            conversation_id: None,
            report_id: None,
            report_status: None,
            created_at: Utc::now(),
        };
        let resp = InterviewResponse::from(interview.clone());
        assert_eq!(resp.candidate_id, interview.candidate_id);
        assert_eq!(resp.job_id, interview.job_id);
        assert_eq!(resp.date, interview.date);
        assert_eq!(resp.status, interview.status);
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::services::job_service::JobDetails;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    pub company_id: Uuid,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn bounds(&self) -> (i64, i64) {
        let skip = self.skip.unwrap_or(0).max(0);
        let limit = self.limit.unwrap_or(100).clamp(1, 500);
        (skip, limit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub posted_date: NaiveDate,
    pub requirements: Vec<String>,
}

impl From<JobDetails> for JobResponse {
    fn from(details: JobDetails) -> Self {
        Self {
            id: details.job.id,
            company_id: details.job.company_id,
            company: details.company,
            title: details.job.title,
            location: details.job.location,
            description: details.job.description,
            posted_date: details.job.posted_date,
            requirements: details.requirements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults_and_clamps() {
        let q = ListQuery {
            skip: None,
            limit: None,
        };
        assert_eq!(q.bounds(), (0, 100));

        let q = ListQuery {
            skip: Some(-3),
            limit: Some(10_000),
        };
        assert_eq!(q.bounds(), (0, 500));
    }
}

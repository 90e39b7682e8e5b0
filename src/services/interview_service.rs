use crate::dto::interview_dto::{CreateInterviewPayload, UpdateInterviewPayload};
use crate::error::{Error, Result};
use crate::models::candidate::status as candidate_status;
use crate::models::interview::{status, Interview, InterviewSummary, InterviewWithOwners};
use sqlx::PgPool;
use uuid::Uuid;

const INTERVIEW_COLUMNS: &str = r#"
    i.id, i.candidate_id, i.job_id, i.date, i.status, i.feedback, i.score,
    i.conversation_id, i.report_id, i.report_status, i.created_at
"#;

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolves the user owning a candidate record, for authorization.
    pub async fn candidate_owner(&self, candidate_id: Uuid) -> Result<Option<Uuid>> {
        let row: Option<(Uuid,)> =
            sqlx::query_as("SELECT user_id FROM candidates WHERE id = $1")
                .bind(candidate_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(user_id,)| user_id))
    }

    pub async fn create(&self, payload: CreateInterviewPayload) -> Result<Interview> {
        let job: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM jobs WHERE id = $1")
            .bind(payload.job_id)
            .fetch_optional(&self.pool)
            .await?;
        if job.is_none() {
            return Err(Error::NotFound("Job not found".to_string()));
        }

        let interview = sqlx::query_as(
            r#"
            INSERT INTO interviews (candidate_id, job_id, date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, candidate_id, job_id, date, status, feedback, score,
                      conversation_id, report_id, report_status, created_at
            "#,
        )
        .bind(payload.candidate_id)
        .bind(payload.job_id)
        .bind(payload.date)
        .bind(&payload.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(interview)
    }

    /// Fetches the interview along with the ownership facts the policy layer
    /// needs, in one query.
    pub async fn get_with_owners(&self, id: Uuid) -> Result<Option<InterviewWithOwners>> {
        let row = sqlx::query_as(&format!(
            r#"
            SELECT {INTERVIEW_COLUMNS},
                   c.user_id AS candidate_user_id,
                   j.company_id AS job_company_id
            FROM interviews i
            JOIN candidates c ON c.id = i.candidate_id
            JOIN jobs j ON j.id = i.job_id
            WHERE i.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Candidate-scoped listing, filtered in SQL rather than after the fact.
    pub async fn list_by_candidate(
        &self,
        candidate_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<InterviewSummary>> {
        let rows = sqlx::query_as(
            r#"
            SELECT i.id, i.date, i.status, j.title AS job_title, co.name AS company
            FROM interviews i
            JOIN jobs j ON j.id = i.job_id
            JOIN companies co ON co.id = j.company_id
            WHERE i.candidate_id = $1
            ORDER BY i.date DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(candidate_id)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Company-scoped listing: only interviews for jobs the company owns.
    pub async fn list_by_company(
        &self,
        company_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Interview>> {
        let rows = sqlx::query_as(&format!(
            r#"
            SELECT {INTERVIEW_COLUMNS}
            FROM interviews i
            JOIN jobs j ON j.id = i.job_id
            WHERE j.company_id = $1
            ORDER BY i.date DESC
            OFFSET $2 LIMIT $3
            "#
        ))
        .bind(company_id)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Applies the update and, when the new status is a terminal outcome,
    /// advances the candidate's status. This is the only transition path for
    /// candidate status in the whole system.
    pub async fn update(&self, id: Uuid, payload: UpdateInterviewPayload) -> Result<Interview> {
        let mut tx = self.pool.begin().await?;

        let interview: Option<Interview> = sqlx::query_as(
            r#"
            UPDATE interviews
            SET date = COALESCE($2, date),
                status = COALESCE($3, status),
                feedback = COALESCE($4, feedback),
                score = COALESCE($5, score)
            WHERE id = $1
            RETURNING id, candidate_id, job_id, date, status, feedback, score,
                      conversation_id, report_id, report_status, created_at
            "#,
        )
        .bind(id)
        .bind(payload.date)
        .bind(&payload.status)
        .bind(&payload.feedback)
        .bind(payload.score)
        .fetch_optional(&mut *tx)
        .await?;
        let interview =
            interview.ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        if let Some(new_candidate_status) = outcome_to_candidate_status(&interview.status) {
            sqlx::query("UPDATE candidates SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(interview.candidate_id)
                .bind(new_candidate_status)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(interview)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Interview not found".to_string()));
        }
        Ok(())
    }
}

fn outcome_to_candidate_status(interview_status: &str) -> Option<&'static str> {
    match interview_status {
        status::COMPLETED => Some(candidate_status::INTERVIEWED),
        status::PASSED => Some(candidate_status::PASSED),
        status::FAILED => Some(candidate_status::REJECTED),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_outcomes_map_onto_candidate_statuses() {
        assert_eq!(
            outcome_to_candidate_status(status::PASSED),
            Some(candidate_status::PASSED)
        );
        assert_eq!(
            outcome_to_candidate_status(status::FAILED),
            Some(candidate_status::REJECTED)
        );
        assert_eq!(
            outcome_to_candidate_status(status::COMPLETED),
            Some(candidate_status::INTERVIEWED)
        );
        assert_eq!(outcome_to_candidate_status(status::SCHEDULED), None);
    }
}

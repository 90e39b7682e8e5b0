use crate::error::Result;
use crate::models::company::{Company, PassedCandidate};
use crate::models::interview::status;
use sqlx::PgPool;
use uuid::Uuid;

/// Interviews scoring at or above this count as passed even when the status
/// field was never flipped (carried over from the grading convention).
const PASS_SCORE_THRESHOLD: i32 = 70;

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Company>> {
        let company = sqlx::query_as("SELECT id, name, created_at FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(company)
    }

    /// Candidates who passed at least one interview for any of the company's
    /// jobs. GROUP BY de-duplicates candidates with multiple passes; the best
    /// score and most recent interview time are aggregated per candidate.
    pub async fn passed_candidates(&self, company_id: Uuid) -> Result<Vec<PassedCandidate>> {
        let rows = sqlx::query_as(
            r#"
            SELECT c.id, u.email, u.full_name, c.phone, c.resume_url,
                   MAX(i.score) AS best_score,
                   MAX(i.created_at) AS last_interview
            FROM candidates c
            JOIN users u ON u.id = c.user_id
            JOIN interviews i ON i.candidate_id = c.id
            JOIN jobs j ON j.id = i.job_id
            WHERE j.company_id = $1
              AND (i.status = $2 OR i.score >= $3)
            GROUP BY c.id, u.email, u.full_name, c.phone, c.resume_url
            ORDER BY MAX(i.created_at) DESC
            "#,
        )
        .bind(company_id)
        .bind(status::PASSED)
        .bind(PASS_SCORE_THRESHOLD)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

use crate::dto::candidate_dto::{CreateCandidatePayload, UpdateCandidatePayload};
use crate::error::{Error, Result};
use crate::models::candidate::{status, CandidateProfile};
use crate::policy::Role;
use crate::utils::crypto;
use sqlx::PgPool;
use uuid::Uuid;

const PROFILE_COLUMNS: &str = r#"
    c.id, c.user_id, u.email, u.full_name, c.phone, c.resume_url,
    c.status, c.created_at
"#;

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<CandidateProfile>> {
        let rows = sqlx::query_as(&format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM candidates c
            JOIN users u ON u.id = c.user_id
            ORDER BY c.created_at
            OFFSET $1 LIMIT $2
            "#
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<CandidateProfile>> {
        let row = sqlx::query_as(&format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM candidates c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Creates the backing user account and the profile in one transaction.
    pub async fn create(&self, payload: CreateCandidatePayload) -> Result<CandidateProfile> {
        let password_hash = crypto::hash_password(&payload.password)?;
        let mut tx = self.pool.begin().await?;

        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(&payload.email)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Err(Error::Conflict("Email already registered".to_string()));
        }

        let (user_id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO users (email, password_hash, full_name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&payload.email)
        .bind(&password_hash)
        .bind(&payload.full_name)
        .bind(Role::Candidate.as_str())
        .fetch_one(&mut *tx)
        .await?;

        let (candidate_id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO candidates (user_id, phone, resume_url, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&payload.phone)
        .bind(&payload.resume_url)
        .bind(status::APPLIED)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get(candidate_id)
            .await?
            .ok_or_else(|| Error::Internal("Candidate vanished after insert".to_string()))
    }

    /// Updates profile and account fields. Status is untouchable here; it only
    /// moves when an interview concludes.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateCandidatePayload,
    ) -> Result<CandidateProfile> {
        let mut tx = self.pool.begin().await?;

        let candidate: Option<(Uuid,)> =
            sqlx::query_as("SELECT user_id FROM candidates WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let (user_id,) = candidate.ok_or_else(|| {
            Error::NotFound("Candidate not found".to_string())
        })?;

        sqlx::query(
            r#"
            UPDATE candidates
            SET phone = COALESCE($2, phone),
                resume_url = COALESCE($3, resume_url),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&payload.phone)
        .bind(&payload.resume_url)
        .execute(&mut *tx)
        .await?;

        let password_hash = match &payload.password {
            Some(plain) => Some(crypto::hash_password(plain)?),
            None => None,
        };
        sqlx::query(
            r#"
            UPDATE users
            SET full_name = COALESCE($2, full_name),
                password_hash = COALESCE($3, password_hash),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(&payload.full_name)
        .bind(&password_hash)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get(id)
            .await?
            .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }

    /// Removes the candidate and its backing user account; interviews go with
    /// it via ON DELETE CASCADE.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let candidate: Option<(Uuid,)> =
            sqlx::query_as("SELECT user_id FROM candidates WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        let (user_id,) =
            candidate.ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

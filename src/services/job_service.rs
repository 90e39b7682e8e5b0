use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::collections::HashMap;
use uuid::Uuid;

/// A job with its company name and ordered requirement strings resolved.
#[derive(Debug, Clone)]
pub struct JobDetails {
    pub job: Job,
    pub company: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, FromRow)]
struct JobCompanyRow {
    #[sqlx(flatten)]
    job: Job,
    company: String,
}

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One query for the page, one batched query for all requirements on it.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<JobDetails>> {
        let rows: Vec<JobCompanyRow> = sqlx::query_as(
            r#"
            SELECT j.id, j.company_id, j.title, j.location, j.description,
                   j.posted_date, j.created_at, j.updated_at,
                   co.name AS company
            FROM jobs j
            JOIN companies co ON co.id = j.company_id
            ORDER BY j.posted_date DESC, j.created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let job_ids: Vec<Uuid> = rows.iter().map(|r| r.job.id).collect();
        let requirements: Vec<(Uuid, String)> = sqlx::query_as(
            r#"
            SELECT job_id, requirement FROM job_requirements
            WHERE job_id = ANY($1)
            ORDER BY job_id, position
            "#,
        )
        .bind(&job_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_job: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (job_id, requirement) in requirements {
            by_job.entry(job_id).or_default().push(requirement);
        }

        Ok(rows
            .into_iter()
            .map(|row| JobDetails {
                requirements: by_job.remove(&row.job.id).unwrap_or_default(),
                company: row.company,
                job: row.job,
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<JobDetails>> {
        let job: Option<Job> = sqlx::query_as(
            r#"
            SELECT id, company_id, title, location, description, posted_date,
                   created_at, updated_at
            FROM jobs WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match job {
            Some(job) => Ok(Some(self.resolve_details(job).await?)),
            None => Ok(None),
        }
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<JobDetails> {
        let mut tx = self.pool.begin().await?;

        let company: Option<(String,)> =
            sqlx::query_as("SELECT name FROM companies WHERE id = $1")
                .bind(payload.company_id)
                .fetch_optional(&mut *tx)
                .await?;
        let (company,) =
            company.ok_or_else(|| Error::NotFound("Company not found".to_string()))?;

        let job: Job = sqlx::query_as(
            r#"
            INSERT INTO jobs (company_id, title, location, description, posted_date)
            VALUES ($1, $2, $3, $4, CURRENT_DATE)
            RETURNING id, company_id, title, location, description, posted_date,
                      created_at, updated_at
            "#,
        )
        .bind(payload.company_id)
        .bind(&payload.title)
        .bind(&payload.location)
        .bind(&payload.description)
        .fetch_one(&mut *tx)
        .await?;

        replace_requirements(&mut tx, job.id, &payload.requirements).await?;
        tx.commit().await?;

        Ok(JobDetails {
            requirements: payload.requirements,
            company,
            job,
        })
    }

    pub async fn update(&self, id: Uuid, payload: UpdateJobPayload) -> Result<JobDetails> {
        let mut tx = self.pool.begin().await?;

        let job: Option<Job> = sqlx::query_as(
            r#"
            UPDATE jobs
            SET title = COALESCE($2, title),
                location = COALESCE($3, location),
                description = COALESCE($4, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, company_id, title, location, description, posted_date,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.location)
        .bind(&payload.description)
        .fetch_optional(&mut *tx)
        .await?;
        let job = job.ok_or_else(|| Error::NotFound("Job not found".to_string()))?;

        if let Some(requirements) = &payload.requirements {
            replace_requirements(&mut tx, id, requirements).await?;
        }
        tx.commit().await?;

        self.resolve_details(job).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    async fn resolve_details(&self, job: Job) -> Result<JobDetails> {
        let (company,): (String,) = sqlx::query_as("SELECT name FROM companies WHERE id = $1")
            .bind(job.company_id)
            .fetch_one(&self.pool)
            .await?;

        let requirements: Vec<(String,)> = sqlx::query_as(
            "SELECT requirement FROM job_requirements WHERE job_id = $1 ORDER BY position",
        )
        .bind(job.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(JobDetails {
            company,
            requirements: requirements.into_iter().map(|(r,)| r).collect(),
            job,
        })
    }
}

async fn replace_requirements(
    tx: &mut Transaction<'_, Postgres>,
    job_id: Uuid,
    requirements: &[String],
) -> Result<()> {
    sqlx::query("DELETE FROM job_requirements WHERE job_id = $1")
        .bind(job_id)
        .execute(&mut **tx)
        .await?;
    for (position, requirement) in requirements.iter().enumerate() {
        sqlx::query(
            "INSERT INTO job_requirements (job_id, position, requirement) VALUES ($1, $2, $3)",
        )
        .bind(job_id)
        .bind(position as i32)
        .bind(requirement)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

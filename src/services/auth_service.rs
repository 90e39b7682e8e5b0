use crate::dto::auth_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::models::candidate::status as candidate_status;
use crate::models::user::User;
use crate::policy::Role;
use crate::utils::crypto;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the user plus whatever the role implies: a company row for
    /// company accounts, a candidate profile for candidate accounts. All in
    /// one transaction so a duplicate email never leaves partial rows.
    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        let role: Role = payload.role.parse()?;
        let password_hash = crypto::hash_password(&payload.password)?;

        let mut tx = self.pool.begin().await?;

        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(&payload.email)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Err(Error::Conflict("Email already registered".to_string()));
        }

        let company_id = match role {
            Role::Company => {
                let name = payload
                    .company_name
                    .as_deref()
                    .filter(|n| !n.trim().is_empty())
                    .ok_or_else(|| {
                        Error::BadRequest(
                            "company_name is required for company accounts".to_string(),
                        )
                    })?;
                let (id,): (Uuid,) =
                    sqlx::query_as("INSERT INTO companies (name) VALUES ($1) RETURNING id")
                        .bind(name)
                        .fetch_one(&mut *tx)
                        .await?;
                Some(id)
            }
            Role::Admin | Role::Candidate => None,
        };

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (email, password_hash, full_name, role, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, full_name, role, company_id,
                      is_active, created_at, updated_at
            "#,
        )
        .bind(&payload.email)
        .bind(&password_hash)
        .bind(&payload.full_name)
        .bind(role.as_str())
        .bind(company_id)
        .fetch_one(&mut *tx)
        .await?;

        if role == Role::Candidate {
            sqlx::query("INSERT INTO candidates (user_id, status) VALUES ($1, $2)")
                .bind(user.id)
                .bind(candidate_status::APPLIED)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::info!(user_id = %user.id, role = %user.role, "registered user");
        Ok(user)
    }

    /// Verifies credentials; the caller mints the token. Lookup and password
    /// failures are indistinguishable on the wire.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, full_name, role, company_id,
                   is_active, created_at, updated_at
            FROM users WHERE email = $1 AND is_active = TRUE
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let invalid = || Error::BadRequest("Invalid credentials".to_string());
        let user = user.ok_or_else(invalid)?;
        if !crypto::verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }
        Ok(user)
    }
}

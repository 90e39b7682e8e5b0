use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// Issues an HS256 bearer token carrying the user's identity and role.
pub fn issue_access_token(
    secret: &str,
    ttl_minutes: i64,
    user_id: Uuid,
    role: &str,
    company_id: Option<Uuid>,
) -> Result<String> {
    let exp = Utc::now() + Duration::minutes(ttl_minutes);
    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp.timestamp() as usize,
        role: Some(role.to_string()),
        company_id,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign token: {}", e)))
}

pub fn decode_access_token(secret: &str, token: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("Invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn issued_token_decodes_with_identity_and_role() {
        let user_id = Uuid::new_v4();
        let token = issue_access_token(SECRET, 60, user_id, "candidate", None).unwrap();
        let claims = decode_access_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role.as_deref(), Some("candidate"));
        assert!(claims.company_id.is_none());
    }

    #[test]
    fn company_id_survives_the_round_trip() {
        let company_id = Uuid::new_v4();
        let token =
            issue_access_token(SECRET, 60, Uuid::new_v4(), "company", Some(company_id)).unwrap();
        let claims = decode_access_token(SECRET, &token).unwrap();
        assert_eq!(claims.company_id, Some(company_id));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_access_token(SECRET, -5, Uuid::new_v4(), "admin", None).unwrap();
        assert!(matches!(
            decode_access_token(SECRET, &token),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn garbage_and_wrong_secret_are_rejected() {
        assert!(decode_access_token(SECRET, "not.a.jwt").is_err());
        let token = issue_access_token("other-secret", 60, Uuid::new_v4(), "admin", None).unwrap();
        assert!(decode_access_token(SECRET, &token).is_err());
    }
}

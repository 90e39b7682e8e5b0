use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub full_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    /// Required when registering with the company role.
    pub company_name: Option<String>,
}

fn default_role() -> String {
    "candidate".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_payload_rejects_bad_email_and_short_password() {
        let payload: RegisterPayload = serde_json::from_value(serde_json::json!({
            "email": "not-an-email",
            "password": "short"
        }))
        .unwrap();
        assert!(payload.validate().is_err());
        assert_eq!(payload.role, "candidate");
    }

    #[test]
    fn register_payload_accepts_well_formed_input() {
        let payload: RegisterPayload = serde_json::from_value(serde_json::json!({
            "email": "jane@example.com",
            "password": "longenough",
            "full_name": "Jane Doe",
            "role": "admin"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn user_response_carries_no_password_hash() {
        let value = serde_json::to_value(UserResponse {
            id: Uuid::new_v4(),
            email: "jane@example.com".into(),
            full_name: None,
            role: "candidate".into(),
        })
        .unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("password").is_none());
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::services::credentials::Credentials;
use crate::infrastructure::auth::jwt::IssuedToken;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Missing fields become empty strings and fail the credential check.
    pub fn into_credentials(self) -> Credentials {
        Credentials {
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    pub message: String,
}

impl LoginResponse {
    pub fn issued(issued: IssuedToken) -> Self {
        Self {
            success: true,
            token: Some(issued.token),
            expiration: Some(issued.expires_at.to_rfc3339()),
            message: "authenticated".to_string(),
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            token: None,
            expiration: None,
            message: message.to_string(),
        }
    }
}

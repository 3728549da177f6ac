use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

/// Failure body shared by every endpoint: `{success: false, message, error?}`.
#[derive(Debug, Serialize)]
pub struct FailureEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// Build a failure response with the given status.
pub fn failure(status: StatusCode, message: impl Into<String>, error: Option<Value>) -> Response {
    let payload = FailureEnvelope {
        success: false,
        message: message.into(),
        error,
    };
    (status, Json(payload)).into_response()
}

/// Field-level validation messages, keyed by wire field name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn into_value(self) -> Value {
        serde_json::to_value(self.0).unwrap_or(Value::Null)
    }
}

pub const MSG_INVALID_REQUEST: &str = "invalid request";
pub const MSG_INVALID_CREDENTIALS: &str = "invalid credentials";
pub const MSG_UNAUTHORIZED: &str = "unauthorized";
pub const MSG_INTERNAL: &str = "internal error";

// HTTP routes: bearer token issuance.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde_json::Value;

use crate::application::usecases::issue_token::{IssueTokenError, IssueTokenUseCase};
use crate::interface::http::dto::auth::{LoginRequest, LoginResponse};
use crate::interface::http::envelope::{
    MSG_INTERNAL, MSG_INVALID_CREDENTIALS, MSG_INVALID_REQUEST, failure,
};
use crate::interface::http::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/auth/token", post(issue_token))
}

/// Exchanges credentials for a bearer token.
async fn issue_token(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    // Step 1: Parse the body.
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return failure(
                StatusCode::BAD_REQUEST,
                MSG_INVALID_REQUEST,
                Some(Value::String(rejection.body_text())),
            );
        }
    };

    // Step 2: Verify and sign.
    let result = IssueTokenUseCase::execute(&state.ctx, payload.into_credentials()).await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(issued) => (StatusCode::OK, Json(LoginResponse::issued(issued))).into_response(),
        Err(IssueTokenError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::rejected(MSG_INVALID_CREDENTIALS)),
        )
            .into_response(),
        Err(IssueTokenError::Signing(msg)) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            MSG_INTERNAL,
            Some(Value::String(msg)),
        ),
    }
}

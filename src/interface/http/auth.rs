use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::interface::http::envelope::{MSG_UNAUTHORIZED, failure};
use crate::interface::http::state::AppState;

/// Subject of the verified bearer token, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct Caller(pub String);

/// Validates the bearer token and injects the `Caller` into the request.
///
/// Health, metrics and token issuance are reachable without a token.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    // Step 1: allow unauthenticated public endpoints.
    if is_public(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    // Step 2: extract the Bearer token from the Authorization header.
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let Some(raw) = header_value
        .strip_prefix("Bearer ")
        .or_else(|| header_value.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
    else {
        return Err(failure(StatusCode::UNAUTHORIZED, MSG_UNAUTHORIZED, None));
    };

    // Step 3: verify signature, expiry, issuer and audience.
    let claims = state.ctx.tokens.verify(raw).map_err(|err| {
        debug!(error = %err, "bearer_token_rejected");
        failure(StatusCode::UNAUTHORIZED, MSG_UNAUTHORIZED, None)
    })?;

    // Step 4: attach the caller for handlers.
    req.extensions_mut().insert(Caller(claims.sub));
    Ok(next.run(req).await)
}

fn is_public(method: &Method, path: &str) -> bool {
    match path {
        "/health" | "/metrics" => true,
        "/api/auth/token" => method == Method::POST,
        _ => false,
    }
}

pub mod auth;
pub mod dto;
pub mod envelope;
pub mod routes;
pub mod state;
pub mod trace;

use axum::Router;
use axum::middleware;

use crate::interface::http::state::AppState;

/// Assembles all routes with tracing, access logging and bearer auth.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::metrics::router())
        .merge(routes::auth::router())
        .merge(routes::work_item::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ))
        .layer(middleware::from_fn(trace::request_log_middleware))
        .layer(middleware::from_fn(trace::trace_id_middleware))
        .with_state(state)
}

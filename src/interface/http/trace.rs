use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Method, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, histogram};
use tracing::info;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation id for one inbound request.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

/// Reuses the caller's `x-request-id` or generates one, and echoes it back.
pub async fn trace_id_middleware(mut req: Request<Body>, next: Next) -> Response {
    // Step 1: Reuse a client-provided id or generate a new one.
    let trace_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let trace_id = TraceId(trace_id);
    req.extensions_mut().insert(trace_id.clone());

    // Step 2: Run the request and stamp the id on the response.
    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&trace_id.0) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Emits one structured `http_request` log line plus request metrics.
pub async fn request_log_middleware(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let trace_id = req.extensions().get::<TraceId>().map(|t| t.0.clone());
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();
    let method_label = method_label(&method);
    let status_label = status_class(status);
    counter!("http_requests_total", "method" => method_label, "status" => status_label)
        .increment(1);
    histogram!(
        "http_request_duration_ms",
        "method" => method_label,
        "status" => status_label
    )
    .record(latency_ms as f64);
    info!(
        trace_id = trace_id.as_deref().unwrap_or(""),
        method = %method,
        path = %path,
        status,
        latency_ms,
        "http_request"
    );

    response
}

// Bounded label set; anything unusual collapses into OTHER.
fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "PUT" => "PUT",
        "PATCH" => "PATCH",
        "DELETE" => "DELETE",
        _ => "OTHER",
    }
}

fn status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

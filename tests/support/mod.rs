#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::IntoResponse;
use serde_json::Value;
use tower::util::ServiceExt;
use workitems_gateway::application::context::AppContext;
use workitems_gateway::config::{AzureDevOps, Jwt, Observability, Server, Settings};
use workitems_gateway::domain::services::credentials::NonEmptyCredentials;
use workitems_gateway::infrastructure::azure_devops::client::AzureDevOpsClient;
use workitems_gateway::interface::http;
use workitems_gateway::interface::http::state::AppState;

pub fn settings(base_url: &str) -> Settings {
    Settings {
        server: Server {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        jwt: Jwt {
            key: "integration-test-signing-key-0123456789".to_string(),
            issuer: "workitems-gateway".to_string(),
            audience: "workitems-gateway-clients".to_string(),
            expiry_in_minutes: 15,
        },
        azure_devops: AzureDevOps {
            organization: "contoso".to_string(),
            project: "web".to_string(),
            pat: "secret-pat".to_string(),
            base_url: base_url.to_string(),
            api_version: "7.0".to_string(),
            request_timeout_ms: 2_000,
        },
        observability: Observability {
            service_name: "workitems-gateway".to_string(),
            log_filter: "info".to_string(),
            enable_metrics: false,
        },
    }
}

pub fn state_for(base_url: &str) -> AppState {
    let settings = settings(base_url);
    let gateway = AzureDevOpsClient::new(&settings.azure_devops).unwrap();
    let ctx = AppContext::new(Arc::new(gateway), Arc::new(NonEmptyCredentials), settings);
    AppState {
        ctx: Arc::new(ctx),
        metrics: None,
    }
}

/// One request received by the fake remote service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

/// In-process stand-in for the remote work item API.
pub struct FakeRemote {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeRemote {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    body: String,
}

async fn record(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
}

/// Starts a fake remote that answers every request with `status` and `body`.
pub async fn spawn_remote(status: StatusCode, body: &str) -> FakeRemote {
    let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(record).with_state(FakeState {
        requests: requests.clone(),
        status,
        body: body.to_string(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake remote");
    let addr = listener.local_addr().expect("get addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    FakeRemote {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("get addr");
    drop(listener);
    format!("http://{addr}")
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Obtains a bearer token through the public token endpoint.
pub async fn issue_token(state: AppState) -> String {
    let response = http::app(state)
        .oneshot(json_request(
            "POST",
            "/api/auth/token",
            None,
            r#"{"username":"alice","password":"pw"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

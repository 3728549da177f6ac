use std::sync::Arc;

use tracing::info;
use workitems_gateway::application::context::AppContext;
use workitems_gateway::config;
use workitems_gateway::domain::services::credentials::NonEmptyCredentials;
use workitems_gateway::infrastructure::azure_devops::client::AzureDevOpsClient;
use workitems_gateway::interface::http;
use workitems_gateway::interface::http::state::AppState;
use workitems_gateway::telemetry;

#[tokio::main]
async fn main() {
    // Step 1: Load and validate configuration; incomplete settings are fatal.
    let settings = config::load().expect("load config");

    // Step 2: Install logging and metrics.
    telemetry::init_tracing(&settings.observability);
    let metrics = telemetry::init_metrics(&settings.observability).expect("install metrics");

    // Step 3: Build the remote gateway.
    let gateway = AzureDevOpsClient::new(&settings.azure_devops).expect("configure azure devops");

    // Step 4: Assemble shared application context and HTTP state.
    let ctx = AppContext::new(
        Arc::new(gateway),
        Arc::new(NonEmptyCredentials),
        settings.clone(),
    );
    let state = AppState {
        ctx: Arc::new(ctx),
        metrics,
    };

    // Step 5: Build the HTTP app.
    let app = http::app(state);
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Step 6: Bind and serve.
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("bind server");
    info!(addr = %bind_addr, "listening");

    axum::serve(listener, app).await.expect("serve");
}

// Azure DevOps work item client: JSON-Patch over REST with PAT basic auth.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use metrics::counter;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::AzureDevOps;
use crate::domain::entities::work_item::{CreateWorkItem, UpdateWorkItem, WorkItemRef};
use crate::domain::services::patch_builder::{
    PatchOperation, build_create_ops, build_update_ops,
};
use crate::domain::services::work_item_gateway::{GatewayError, WorkItemGateway};
use crate::domain::value_objects::ids::WorkItemId;

pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

pub struct AzureDevOpsClient {
    base_url: String,
    organization: String,
    project: String,
    api_version: String,
    auth_header: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct WorkItemPayload {
    id: Option<i32>,
    #[serde(rename = "_links")]
    links: Option<Links>,
}

#[derive(Deserialize)]
struct Links {
    html: Option<Link>,
}

#[derive(Deserialize)]
struct Link {
    href: Option<String>,
}

impl From<WorkItemPayload> for WorkItemRef {
    fn from(payload: WorkItemPayload) -> Self {
        WorkItemRef {
            id: payload.id.map(WorkItemId),
            url: payload.links.and_then(|l| l.html).and_then(|h| h.href),
        }
    }
}

impl AzureDevOpsClient {
    /// Builds a client for one organization/project.
    ///
    /// Fails when organization, project or PAT is empty.
    pub fn new(settings: &AzureDevOps) -> Result<Self, GatewayError> {
        // Step 1: Reject incomplete configuration.
        let required = [
            (settings.organization.as_str(), "organization"),
            (settings.project.as_str(), "project"),
            (settings.pat.as_str(), "pat"),
        ];
        if let Some((_, name)) = required.into_iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(GatewayError::Configuration(format!("{name} is required")));
        }

        // Step 2: Basic auth with an empty user name and the PAT as password.
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!(":{}", settings.pat));

        // Step 3: Build the HTTP client with the configured timeout.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            organization: settings.organization.clone(),
            project: settings.project.clone(),
            api_version: settings.api_version.clone(),
            auth_header: format!("Basic {encoded}"),
            client,
        })
    }

    pub fn create_url(&self, work_item_type: &str) -> String {
        format!(
            "{}/${}?api-version={}",
            self.collection_url(),
            urlencoding::encode(work_item_type),
            self.api_version
        )
    }

    pub fn update_url(&self, id: WorkItemId) -> String {
        format!(
            "{}/{}?api-version={}",
            self.collection_url(),
            id,
            self.api_version
        )
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/{}/{}/_apis/wit/workitems",
            self.base_url,
            urlencoding::encode(&self.organization),
            urlencoding::encode(&self.project)
        )
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        ops: &[PatchOperation],
    ) -> Result<WorkItemRef, GatewayError> {
        // Step 1: Serialize the patch document.
        let body = serde_json::to_vec(ops)
            .map_err(|e| GatewayError::Transport(format!("encode patch document: {e}")))?;

        // Step 2: Send a single request; no retries.
        let response = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        // Step 3: Map the status code before looking at the body.
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound { body: text });
        }
        if !status.is_success() {
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body: text,
            });
        }

        // Step 4: Extract the id and the browser link.
        let payload: WorkItemPayload = serde_json::from_str(&text)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        Ok(payload.into())
    }
}

#[async_trait]
impl WorkItemGateway for AzureDevOpsClient {
    async fn create_work_item(
        &self,
        request: &CreateWorkItem,
    ) -> Result<WorkItemRef, GatewayError> {
        let url = self.create_url(&request.work_item_type);
        let ops = build_create_ops(request);
        debug!(url = %url, operations = ops.len(), "azure_devops_create");
        let result = self.send(Method::POST, &url, &ops).await;
        record_outcome("create", &result);
        result
    }

    async fn update_work_item(
        &self,
        request: &UpdateWorkItem,
    ) -> Result<WorkItemRef, GatewayError> {
        let ops = build_update_ops(request)?;
        let url = self.update_url(request.id);
        debug!(url = %url, operations = ops.len(), "azure_devops_update");
        let result = self.send(Method::PATCH, &url, &ops).await;
        record_outcome("update", &result);
        result
    }
}

fn record_outcome(operation: &'static str, result: &Result<WorkItemRef, GatewayError>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(GatewayError::NotFound { .. }) => "not_found",
        Err(GatewayError::Remote { .. }) => "remote_error",
        Err(_) => "internal_error",
    };
    if let Err(err) = result {
        warn!(operation, error = %err, "azure_devops_request_failed");
    }
    counter!("azure_devops_requests_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}

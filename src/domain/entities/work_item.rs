use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::services::work_item_gateway::GatewayError;
use crate::domain::value_objects::ids::WorkItemId;

/// Work item type used when a create request does not name one.
pub const DEFAULT_WORK_ITEM_TYPE: &str = "Task";

/// Caller-supplied field reference names mapped to arbitrary JSON values.
///
/// Iteration is ordered by field name, which fixes the order of the
/// custom-field patch operations.
pub type CustomFields = BTreeMap<String, Value>;

/// A validated request to create a work item.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateWorkItem {
    pub title: String,
    pub description: Option<String>,
    pub work_item_type: String,
    pub assigned_to: Option<String>,
    pub priority: Option<i32>,
    pub custom_fields: CustomFields,
}

impl CreateWorkItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            work_item_type: DEFAULT_WORK_ITEM_TYPE.to_string(),
            assigned_to: None,
            priority: None,
            custom_fields: CustomFields::new(),
        }
    }
}

/// A validated request to change fields of an existing work item.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkItem {
    pub id: WorkItemId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub assigned_to: Option<String>,
    pub priority: Option<i32>,
    pub custom_fields: CustomFields,
}

impl UpdateWorkItem {
    pub fn new(id: WorkItemId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            state: None,
            assigned_to: None,
            priority: None,
            custom_fields: CustomFields::new(),
        }
    }
}

/// What the remote service reports back about a created or updated work item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkItemRef {
    pub id: Option<WorkItemId>,
    pub url: Option<String>,
}

/// Uniform outcome of a create or update call, returned to HTTP clients as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemResponse {
    pub success: bool,
    pub work_item_id: Option<WorkItemId>,
    pub url: Option<String>,
    pub message: String,
    pub error: Option<Value>,
}

impl WorkItemResponse {
    pub fn created(item: WorkItemRef) -> Self {
        Self::succeeded(item, "created")
    }

    pub fn updated(item: WorkItemRef) -> Self {
        Self::succeeded(item, "updated")
    }

    pub fn failure(message: impl Into<String>, error: Option<Value>) -> Self {
        Self {
            success: false,
            work_item_id: None,
            url: None,
            message: message.into(),
            error,
        }
    }

    /// Normalizes a gateway create result.
    pub fn for_create(result: Result<WorkItemRef, GatewayError>) -> Self {
        match result {
            Ok(item) => Self::created(item),
            Err(err) => Self::from_error(&err),
        }
    }

    /// Normalizes a gateway update result.
    pub fn for_update(result: Result<WorkItemRef, GatewayError>) -> Self {
        match result {
            Ok(item) => Self::updated(item),
            Err(err) => Self::from_error(&err),
        }
    }

    pub fn from_error(err: &GatewayError) -> Self {
        match err {
            GatewayError::NoFieldsToUpdate => Self::failure("no fields specified", None),
            GatewayError::NotFound { body } => Self::failure("error: 404", Some(remote_body(body))),
            GatewayError::Remote { status, body } => {
                Self::failure(format!("error: {status}"), Some(remote_body(body)))
            }
            GatewayError::Transport(_)
            | GatewayError::MalformedResponse(_)
            | GatewayError::Configuration(_) => {
                Self::failure("internal error", Some(Value::String(err.to_string())))
            }
        }
    }

    fn succeeded(item: WorkItemRef, message: &str) -> Self {
        Self {
            success: true,
            work_item_id: item.id,
            url: item.url,
            message: message.to_string(),
            error: None,
        }
    }
}

// Remote error bodies are usually JSON; keep them structured when they are.
fn remote_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

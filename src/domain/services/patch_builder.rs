// Translates work item requests into JSON-Patch "add" operations.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::work_item::{CreateWorkItem, CustomFields, UpdateWorkItem};

pub const FIELD_TITLE: &str = "System.Title";
pub const FIELD_DESCRIPTION: &str = "System.Description";
pub const FIELD_STATE: &str = "System.State";
pub const FIELD_ASSIGNED_TO: &str = "System.AssignedTo";
pub const FIELD_PRIORITY: &str = "Microsoft.VSTS.Common.Priority";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
}

/// One entry of the JSON-Patch document sent to the remote service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    pub value: Value,
}

impl PatchOperation {
    pub fn add_field(field: &str, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOp::Add,
            path: format!("/fields/{field}"),
            value: value.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("no fields specified")]
    NoFieldsToUpdate,
}

/// Builds the operations for a new work item. The title is always included.
pub fn build_create_ops(request: &CreateWorkItem) -> Vec<PatchOperation> {
    let mut ops = vec![PatchOperation::add_field(FIELD_TITLE, request.title.as_str())];
    push_text(&mut ops, FIELD_DESCRIPTION, request.description.as_deref());
    push_text(&mut ops, FIELD_ASSIGNED_TO, request.assigned_to.as_deref());
    push_priority(&mut ops, request.priority);
    push_custom(&mut ops, &request.custom_fields);
    ops
}

/// Builds the operations for an update; the result may be empty.
pub fn update_ops(request: &UpdateWorkItem) -> Vec<PatchOperation> {
    let mut ops = Vec::new();
    push_text(&mut ops, FIELD_TITLE, request.title.as_deref());
    push_text(&mut ops, FIELD_DESCRIPTION, request.description.as_deref());
    push_text(&mut ops, FIELD_STATE, request.state.as_deref());
    push_text(&mut ops, FIELD_ASSIGNED_TO, request.assigned_to.as_deref());
    push_priority(&mut ops, request.priority);
    push_custom(&mut ops, &request.custom_fields);
    ops
}

/// Like [`update_ops`], but an update that changes nothing is an error.
pub fn build_update_ops(request: &UpdateWorkItem) -> Result<Vec<PatchOperation>, PatchError> {
    let ops = update_ops(request);
    if ops.is_empty() {
        return Err(PatchError::NoFieldsToUpdate);
    }
    Ok(ops)
}

fn push_text(ops: &mut Vec<PatchOperation>, field: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        ops.push(PatchOperation::add_field(field, value));
    }
}

fn push_priority(ops: &mut Vec<PatchOperation>, priority: Option<i32>) {
    if let Some(priority) = priority {
        ops.push(PatchOperation::add_field(FIELD_PRIORITY, priority));
    }
}

fn push_custom(ops: &mut Vec<PatchOperation>, fields: &CustomFields) {
    ops.extend(
        fields
            .iter()
            .map(|(name, value)| PatchOperation::add_field(name, value.clone())),
    );
}

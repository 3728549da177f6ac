use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::work_item::{CreateWorkItem, UpdateWorkItem, WorkItemRef};
use crate::domain::services::patch_builder::PatchError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("incomplete remote configuration: {0}")]
    Configuration(String),

    #[error("no fields specified")]
    NoFieldsToUpdate,

    #[error("remote reported not found")]
    NotFound { body: String },

    #[error("remote returned status {status}")]
    Remote { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed remote response: {0}")]
    MalformedResponse(String),
}

/// Remote work tracking service that stores work items.
///
/// Implementations make a single attempt per call and report every failure as
/// a `GatewayError`; nothing is retried.
#[async_trait]
pub trait WorkItemGateway: Send + Sync {
    async fn create_work_item(&self, request: &CreateWorkItem)
        -> Result<WorkItemRef, GatewayError>;

    async fn update_work_item(&self, request: &UpdateWorkItem)
        -> Result<WorkItemRef, GatewayError>;
}

impl From<PatchError> for GatewayError {
    fn from(err: PatchError) -> Self {
        match err {
            PatchError::NoFieldsToUpdate => GatewayError::NoFieldsToUpdate,
        }
    }
}

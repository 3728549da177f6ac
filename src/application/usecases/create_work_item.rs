// Use case: create_work_item.

use tracing::{info, warn};

use crate::application::context::AppContext;
use crate::domain::entities::work_item::{CreateWorkItem, WorkItemRef};
use crate::domain::services::work_item_gateway::GatewayError;

/// Creates a work item in the remote service.
pub struct CreateWorkItemUseCase;

impl CreateWorkItemUseCase {
    pub async fn execute(
        ctx: &AppContext,
        requested_by: &str,
        request: CreateWorkItem,
    ) -> Result<WorkItemRef, GatewayError> {
        info!(
            requested_by,
            title = %request.title,
            work_item_type = %request.work_item_type,
            "creating_work_item"
        );

        let result = ctx.gateway.create_work_item(&request).await;

        match &result {
            Ok(item) => info!(work_item_id = ?item.id.map(|id| id.0), "work_item_created"),
            Err(err) => warn!(error = %err, "work_item_create_failed"),
        }
        result
    }
}

// Use case: update_work_item.

use tracing::{info, warn};

use crate::application::context::AppContext;
use crate::domain::entities::work_item::{UpdateWorkItem, WorkItemRef};
use crate::domain::services::work_item_gateway::GatewayError;
use crate::domain::value_objects::ids::WorkItemId;

/// Updates fields of an existing work item.
pub struct UpdateWorkItemUseCase;

#[derive(Debug, PartialEq, Eq)]
pub enum UpdateWorkItemError {
    /// The id addressed by the route differs from the id in the body.
    IdMismatch { route: WorkItemId, body: WorkItemId },
    Gateway(GatewayError),
}

impl UpdateWorkItemUseCase {
    pub async fn execute(
        ctx: &AppContext,
        requested_by: &str,
        route_id: WorkItemId,
        request: UpdateWorkItem,
    ) -> Result<WorkItemRef, UpdateWorkItemError> {
        // Step 1: The route and body must address the same item.
        if route_id != request.id {
            return Err(UpdateWorkItemError::IdMismatch {
                route: route_id,
                body: request.id,
            });
        }

        // Step 2: Forward the update to the remote service.
        info!(requested_by, work_item_id = request.id.0, "updating_work_item");
        let result = ctx.gateway.update_work_item(&request).await;

        // Step 3: Log the outcome.
        match &result {
            Ok(_) => info!(work_item_id = request.id.0, "work_item_updated"),
            Err(err) => warn!(work_item_id = request.id.0, error = %err, "work_item_update_failed"),
        }
        result.map_err(UpdateWorkItemError::Gateway)
    }
}

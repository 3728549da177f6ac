// HTTP routes: create/update work items.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{post, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::application::usecases::create_work_item::CreateWorkItemUseCase;
use crate::application::usecases::update_work_item::{UpdateWorkItemError, UpdateWorkItemUseCase};
use crate::domain::entities::work_item::WorkItemResponse;
use crate::domain::services::work_item_gateway::GatewayError;
use crate::domain::value_objects::ids::WorkItemId;
use crate::interface::http::auth::Caller;
use crate::interface::http::dto::work_item::{CreateWorkItemRequest, UpdateWorkItemRequest};
use crate::interface::http::envelope::MSG_INVALID_REQUEST;
use crate::interface::http::state::AppState;

/// Builds the work item routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/workitems", post(create_work_item))
        .route("/api/workitems/:id", put(update_work_item))
}

/// Creates a work item and returns its id and browser link.
async fn create_work_item(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<CreateWorkItemRequest>, JsonRejection>,
) -> Response {
    // Step 1: Parse and validate the body.
    let request = match payload {
        Ok(Json(payload)) => match payload.validate() {
            Ok(request) => request,
            Err(errors) => return invalid(Some(errors.into_value())),
        },
        Err(rejection) => return invalid(Some(Value::String(rejection.body_text()))),
    };

    // Step 2: Execute the create use case.
    let result = CreateWorkItemUseCase::execute(&state.ctx, &caller.0, request).await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(item) => respond(StatusCode::OK, WorkItemResponse::created(item)),
        Err(err) => respond(status_for(&err), WorkItemResponse::from_error(&err)),
    }
}

/// Updates the fields named in the body of an existing work item.
async fn update_work_item(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    route_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateWorkItemRequest>, JsonRejection>,
) -> Response {
    // Step 1: Parse the route id.
    let route_id = match route_id {
        Ok(Path(id)) => WorkItemId(id),
        Err(rejection) => return invalid(Some(Value::String(rejection.body_text()))),
    };

    // Step 2: Parse and validate the body.
    let request = match payload {
        Ok(Json(payload)) => match payload.validate() {
            Ok(request) => request,
            Err(errors) => return invalid(Some(errors.into_value())),
        },
        Err(rejection) => return invalid(Some(Value::String(rejection.body_text()))),
    };

    // Step 3: Execute the update use case.
    let result = UpdateWorkItemUseCase::execute(&state.ctx, &caller.0, route_id, request).await;

    // Step 4: Map output to HTTP response.
    match result {
        Ok(item) => respond(StatusCode::OK, WorkItemResponse::updated(item)),
        Err(UpdateWorkItemError::IdMismatch { .. }) => respond(
            StatusCode::BAD_REQUEST,
            WorkItemResponse::failure("route id does not match body id", None),
        ),
        Err(UpdateWorkItemError::Gateway(GatewayError::NotFound { .. })) => respond(
            StatusCode::NOT_FOUND,
            WorkItemResponse::failure(format!("work item {route_id} not found"), None),
        ),
        Err(UpdateWorkItemError::Gateway(err)) => {
            respond(status_for(&err), WorkItemResponse::from_error(&err))
        }
    }
}

fn status_for(err: &GatewayError) -> StatusCode {
    match err {
        GatewayError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
        GatewayError::NotFound { .. } => StatusCode::NOT_FOUND,
        GatewayError::Remote { .. }
        | GatewayError::Transport(_)
        | GatewayError::MalformedResponse(_)
        | GatewayError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn invalid(detail: Option<Value>) -> Response {
    respond(
        StatusCode::BAD_REQUEST,
        WorkItemResponse::failure(MSG_INVALID_REQUEST, detail),
    )
}

fn respond(status: StatusCode, body: WorkItemResponse) -> Response {
    (status, Json(body)).into_response()
}

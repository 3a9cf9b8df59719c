use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreatePurchaseOrderRequest, UpdatePurchaseOrderRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, StrictJson,
};
use crate::AppState;

/// Creates the router for purchase order endpoints
pub fn purchase_orders_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_purchase_order).get(list_purchase_orders))
        .route(
            "/:id",
            get(get_purchase_order).patch(update_purchase_order).delete(delete_purchase_order),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/purchaseOrders",
    tag = "purchaseOrders",
    request_body = CreatePurchaseOrderRequest,
    responses(
        (status = 201, description = "PurchaseOrder created", body = crate::entities::purchase_order::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_purchase_order(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreatePurchaseOrderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let purchase_order = state.services.purchase_orders.create(payload).await?;
    Ok(created_response(purchase_order))
}

#[utoipa::path(
    get,
    path = "/api/v1/purchaseOrders",
    tag = "purchaseOrders",
    responses(
        (status = 200, description = "Every PurchaseOrder ordered by id", body = Vec<crate::entities::purchase_order::Model>)
    )
)]
pub async fn list_purchase_orders(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let purchase_orders = state.services.purchase_orders.get_all().await?;
    Ok(success_response(purchase_orders))
}

#[utoipa::path(
    get,
    path = "/api/v1/purchaseOrders/{id}",
    tag = "purchaseOrders",
    params(("id" = i32, Path, description = "PurchaseOrder id")),
    responses(
        (status = 200, description = "PurchaseOrder found", body = crate::entities::purchase_order::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "PurchaseOrder not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_purchase_order(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let purchase_order = state.services.purchase_orders.get_by_id(id).await?;
    Ok(success_response(purchase_order))
}

#[utoipa::path(
    patch,
    path = "/api/v1/purchaseOrders/{id}",
    tag = "purchaseOrders",
    params(("id" = i32, Path, description = "PurchaseOrder id")),
    request_body = UpdatePurchaseOrderRequest,
    responses(
        (status = 200, description = "PurchaseOrder updated", body = crate::entities::purchase_order::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "PurchaseOrder not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_purchase_order(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdatePurchaseOrderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let purchase_order = state.services.purchase_orders.update(id, payload).await?;
    Ok(success_response(purchase_order))
}

#[utoipa::path(
    delete,
    path = "/api/v1/purchaseOrders/{id}",
    tag = "purchaseOrders",
    params(("id" = i32, Path, description = "PurchaseOrder id")),
    responses(
        (status = 204, description = "PurchaseOrder deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "PurchaseOrder not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "PurchaseOrder is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_purchase_order(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.purchase_orders.delete(id).await?;
    Ok(no_content_response())
}

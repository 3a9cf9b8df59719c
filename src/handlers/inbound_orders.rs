use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateInboundOrderRequest, UpdateInboundOrderRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, StrictJson,
};
use crate::AppState;

/// Creates the router for inbound order endpoints
pub fn inbound_orders_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_inbound_order).get(list_inbound_orders))
        .route(
            "/:id",
            get(get_inbound_order).patch(update_inbound_order).delete(delete_inbound_order),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/inboundOrders",
    tag = "inboundOrders",
    request_body = CreateInboundOrderRequest,
    responses(
        (status = 201, description = "InboundOrder created", body = crate::entities::inbound_order::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_inbound_order(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateInboundOrderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let inbound_order = state.services.inbound_orders.create(payload).await?;
    Ok(created_response(inbound_order))
}

#[utoipa::path(
    get,
    path = "/api/v1/inboundOrders",
    tag = "inboundOrders",
    responses(
        (status = 200, description = "Every InboundOrder ordered by id", body = Vec<crate::entities::inbound_order::Model>)
    )
)]
pub async fn list_inbound_orders(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let inbound_orders = state.services.inbound_orders.get_all().await?;
    Ok(success_response(inbound_orders))
}

#[utoipa::path(
    get,
    path = "/api/v1/inboundOrders/{id}",
    tag = "inboundOrders",
    params(("id" = i32, Path, description = "InboundOrder id")),
    responses(
        (status = 200, description = "InboundOrder found", body = crate::entities::inbound_order::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "InboundOrder not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_inbound_order(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let inbound_order = state.services.inbound_orders.get_by_id(id).await?;
    Ok(success_response(inbound_order))
}

#[utoipa::path(
    patch,
    path = "/api/v1/inboundOrders/{id}",
    tag = "inboundOrders",
    params(("id" = i32, Path, description = "InboundOrder id")),
    request_body = UpdateInboundOrderRequest,
    responses(
        (status = 200, description = "InboundOrder updated", body = crate::entities::inbound_order::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "InboundOrder not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_inbound_order(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateInboundOrderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let inbound_order = state.services.inbound_orders.update(id, payload).await?;
    Ok(success_response(inbound_order))
}

#[utoipa::path(
    delete,
    path = "/api/v1/inboundOrders/{id}",
    tag = "inboundOrders",
    params(("id" = i32, Path, description = "InboundOrder id")),
    responses(
        (status = 204, description = "InboundOrder deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "InboundOrder not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "InboundOrder is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_inbound_order(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.inbound_orders.delete(id).await?;
    Ok(no_content_response())
}

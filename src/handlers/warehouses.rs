use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateWarehouseRequest, UpdateWarehouseRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, StrictJson,
};
use crate::AppState;

/// Creates the router for warehouse endpoints
pub fn warehouses_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_warehouse).get(list_warehouses))
        .route(
            "/:id",
            get(get_warehouse).patch(update_warehouse).delete(delete_warehouse),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/warehouses",
    tag = "warehouses",
    request_body = CreateWarehouseRequest,
    responses(
        (status = 201, description = "Warehouse created", body = crate::entities::warehouse::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateWarehouseRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let warehouse = state.services.warehouses.create(payload).await?;
    Ok(created_response(warehouse))
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses",
    tag = "warehouses",
    responses(
        (status = 200, description = "Every Warehouse ordered by id", body = Vec<crate::entities::warehouse::Model>)
    )
)]
pub async fn list_warehouses(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let warehouses = state.services.warehouses.get_all().await?;
    Ok(success_response(warehouses))
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses/{id}",
    tag = "warehouses",
    params(("id" = i32, Path, description = "Warehouse id")),
    responses(
        (status = 200, description = "Warehouse found", body = crate::entities::warehouse::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Warehouse not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_warehouse(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouse = state.services.warehouses.get_by_id(id).await?;
    Ok(success_response(warehouse))
}

#[utoipa::path(
    patch,
    path = "/api/v1/warehouses/{id}",
    tag = "warehouses",
    params(("id" = i32, Path, description = "Warehouse id")),
    request_body = UpdateWarehouseRequest,
    responses(
        (status = 200, description = "Warehouse updated", body = crate::entities::warehouse::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Warehouse not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_warehouse(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateWarehouseRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let warehouse = state.services.warehouses.update(id, payload).await?;
    Ok(success_response(warehouse))
}

#[utoipa::path(
    delete,
    path = "/api/v1/warehouses/{id}",
    tag = "warehouses",
    params(("id" = i32, Path, description = "Warehouse id")),
    responses(
        (status = 204, description = "Warehouse deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Warehouse not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Warehouse is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_warehouse(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.warehouses.delete(id).await?;
    Ok(no_content_response())
}

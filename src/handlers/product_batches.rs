use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateProductBatchRequest, UpdateProductBatchRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, StrictJson,
};
use crate::AppState;

/// Creates the router for product batch endpoints
pub fn product_batches_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product_batch).get(list_product_batches))
        .route(
            "/:id",
            get(get_product_batch).patch(update_product_batch).delete(delete_product_batch),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/productBatches",
    tag = "productBatches",
    request_body = CreateProductBatchRequest,
    responses(
        (status = 201, description = "ProductBatch created", body = crate::entities::product_batch::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_product_batch(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateProductBatchRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let product_batch = state.services.product_batches.create(payload).await?;
    Ok(created_response(product_batch))
}

#[utoipa::path(
    get,
    path = "/api/v1/productBatches",
    tag = "productBatches",
    responses(
        (status = 200, description = "Every ProductBatch ordered by id", body = Vec<crate::entities::product_batch::Model>)
    )
)]
pub async fn list_product_batches(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let product_batches = state.services.product_batches.get_all().await?;
    Ok(success_response(product_batches))
}

#[utoipa::path(
    get,
    path = "/api/v1/productBatches/{id}",
    tag = "productBatches",
    params(("id" = i32, Path, description = "ProductBatch id")),
    responses(
        (status = 200, description = "ProductBatch found", body = crate::entities::product_batch::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "ProductBatch not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_product_batch(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let product_batch = state.services.product_batches.get_by_id(id).await?;
    Ok(success_response(product_batch))
}

#[utoipa::path(
    patch,
    path = "/api/v1/productBatches/{id}",
    tag = "productBatches",
    params(("id" = i32, Path, description = "ProductBatch id")),
    request_body = UpdateProductBatchRequest,
    responses(
        (status = 200, description = "ProductBatch updated", body = crate::entities::product_batch::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "ProductBatch not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_product_batch(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateProductBatchRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let product_batch = state.services.product_batches.update(id, payload).await?;
    Ok(success_response(product_batch))
}

#[utoipa::path(
    delete,
    path = "/api/v1/productBatches/{id}",
    tag = "productBatches",
    params(("id" = i32, Path, description = "ProductBatch id")),
    responses(
        (status = 204, description = "ProductBatch deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "ProductBatch not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "ProductBatch is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_product_batch(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.product_batches.delete(id).await?;
    Ok(no_content_response())
}

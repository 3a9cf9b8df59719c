use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateProductRecordRequest, UpdateProductRecordRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, StrictJson,
};
use crate::AppState;

/// Creates the router for product record endpoints
pub fn product_records_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product_record).get(list_product_records))
        .route(
            "/:id",
            get(get_product_record).patch(update_product_record).delete(delete_product_record),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/productRecords",
    tag = "productRecords",
    request_body = CreateProductRecordRequest,
    responses(
        (status = 201, description = "ProductRecord created", body = crate::entities::product_record::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_product_record(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateProductRecordRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let product_record = state.services.product_records.create(payload).await?;
    Ok(created_response(product_record))
}

#[utoipa::path(
    get,
    path = "/api/v1/productRecords",
    tag = "productRecords",
    responses(
        (status = 200, description = "Every ProductRecord ordered by id", body = Vec<crate::entities::product_record::Model>)
    )
)]
pub async fn list_product_records(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let product_records = state.services.product_records.get_all().await?;
    Ok(success_response(product_records))
}

#[utoipa::path(
    get,
    path = "/api/v1/productRecords/{id}",
    tag = "productRecords",
    params(("id" = i32, Path, description = "ProductRecord id")),
    responses(
        (status = 200, description = "ProductRecord found", body = crate::entities::product_record::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "ProductRecord not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_product_record(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let product_record = state.services.product_records.get_by_id(id).await?;
    Ok(success_response(product_record))
}

#[utoipa::path(
    patch,
    path = "/api/v1/productRecords/{id}",
    tag = "productRecords",
    params(("id" = i32, Path, description = "ProductRecord id")),
    request_body = UpdateProductRecordRequest,
    responses(
        (status = 200, description = "ProductRecord updated", body = crate::entities::product_record::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "ProductRecord not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_product_record(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateProductRecordRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let product_record = state.services.product_records.update(id, payload).await?;
    Ok(success_response(product_record))
}

#[utoipa::path(
    delete,
    path = "/api/v1/productRecords/{id}",
    tag = "productRecords",
    params(("id" = i32, Path, description = "ProductRecord id")),
    responses(
        (status = 204, description = "ProductRecord deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "ProductRecord not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "ProductRecord is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_product_record(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.product_records.delete(id).await?;
    Ok(no_content_response())
}

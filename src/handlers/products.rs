use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateProductRequest, UpdateProductRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, ReportId,
    StrictJson,
};
use crate::AppState;

/// Creates the router for product endpoints
pub fn products_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/reportRecords", get(report_records))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = crate::entities::product::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateProductRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let product = state.services.products.create(payload).await?;
    Ok(created_response(product))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    responses(
        (status = 200, description = "Every Product ordered by id", body = Vec<crate::entities::product::Model>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let products = state.services.products.get_all().await?;
    Ok(success_response(products))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = crate::entities::product::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.services.products.get_by_id(id).await?;
    Ok(success_response(product))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = crate::entities::product::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let product = state.services.products.update(id, payload).await?;
    Ok(success_response(product))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Product is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.products.delete(id).await?;
    Ok(no_content_response())
}

/// Price records per product; `?id=` narrows to one product.
#[utoipa::path(
    get,
    path = "/api/v1/products/reportRecords",
    tag = "products",
    params(("id" = Option<i32>, Query, description = "Narrow the report to one Product; the row is returned as an object")),
    responses(
        (status = 200, description = "Product records per product", body = Vec<crate::dto::reports::ProductRecordsReport>),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn report_records(
    State(state): State<AppState>,
    ReportId(id): ReportId,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.products.report_records(id).await?;
    Ok(success_response(report))
}

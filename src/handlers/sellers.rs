use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateSellerRequest, UpdateSellerRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, StrictJson,
};
use crate::AppState;

/// Creates the router for seller endpoints
pub fn sellers_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_seller).get(list_sellers))
        .route(
            "/:id",
            get(get_seller).patch(update_seller).delete(delete_seller),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/sellers",
    tag = "sellers",
    request_body = CreateSellerRequest,
    responses(
        (status = 201, description = "Seller created", body = crate::entities::seller::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_seller(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateSellerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let seller = state.services.sellers.create(payload).await?;
    Ok(created_response(seller))
}

#[utoipa::path(
    get,
    path = "/api/v1/sellers",
    tag = "sellers",
    responses(
        (status = 200, description = "Every Seller ordered by id", body = Vec<crate::entities::seller::Model>)
    )
)]
pub async fn list_sellers(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let sellers = state.services.sellers.get_all().await?;
    Ok(success_response(sellers))
}

#[utoipa::path(
    get,
    path = "/api/v1/sellers/{id}",
    tag = "sellers",
    params(("id" = i32, Path, description = "Seller id")),
    responses(
        (status = 200, description = "Seller found", body = crate::entities::seller::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Seller not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_seller(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let seller = state.services.sellers.get_by_id(id).await?;
    Ok(success_response(seller))
}

#[utoipa::path(
    patch,
    path = "/api/v1/sellers/{id}",
    tag = "sellers",
    params(("id" = i32, Path, description = "Seller id")),
    request_body = UpdateSellerRequest,
    responses(
        (status = 200, description = "Seller updated", body = crate::entities::seller::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Seller not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_seller(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateSellerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let seller = state.services.sellers.update(id, payload).await?;
    Ok(success_response(seller))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sellers/{id}",
    tag = "sellers",
    params(("id" = i32, Path, description = "Seller id")),
    responses(
        (status = 204, description = "Seller deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Seller not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Seller is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_seller(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.sellers.delete(id).await?;
    Ok(no_content_response())
}

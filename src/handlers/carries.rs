use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateCarryRequest, UpdateCarryRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, StrictJson,
};
use crate::AppState;

/// Creates the router for carry endpoints
pub fn carries_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_carry).get(list_carries))
        .route(
            "/:id",
            get(get_carry).patch(update_carry).delete(delete_carry),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/carries",
    tag = "carries",
    request_body = CreateCarryRequest,
    responses(
        (status = 201, description = "Carry created", body = crate::entities::carry::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_carry(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateCarryRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let carry = state.services.carries.create(payload).await?;
    Ok(created_response(carry))
}

#[utoipa::path(
    get,
    path = "/api/v1/carries",
    tag = "carries",
    responses(
        (status = 200, description = "Every Carry ordered by id", body = Vec<crate::entities::carry::Model>)
    )
)]
pub async fn list_carries(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let carries = state.services.carries.get_all().await?;
    Ok(success_response(carries))
}

#[utoipa::path(
    get,
    path = "/api/v1/carries/{id}",
    tag = "carries",
    params(("id" = i32, Path, description = "Carry id")),
    responses(
        (status = 200, description = "Carry found", body = crate::entities::carry::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Carry not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_carry(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let carry = state.services.carries.get_by_id(id).await?;
    Ok(success_response(carry))
}

#[utoipa::path(
    patch,
    path = "/api/v1/carries/{id}",
    tag = "carries",
    params(("id" = i32, Path, description = "Carry id")),
    request_body = UpdateCarryRequest,
    responses(
        (status = 200, description = "Carry updated", body = crate::entities::carry::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Carry not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_carry(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateCarryRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let carry = state.services.carries.update(id, payload).await?;
    Ok(success_response(carry))
}

#[utoipa::path(
    delete,
    path = "/api/v1/carries/{id}",
    tag = "carries",
    params(("id" = i32, Path, description = "Carry id")),
    responses(
        (status = 204, description = "Carry deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Carry not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Carry is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_carry(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.carries.delete(id).await?;
    Ok(no_content_response())
}

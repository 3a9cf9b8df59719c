use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateBuyerRequest, UpdateBuyerRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, ReportId,
    StrictJson,
};
use crate::AppState;

/// Creates the router for buyer endpoints
pub fn buyers_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_buyer).get(list_buyers))
        .route("/reportPurchaseOrders", get(report_purchase_orders))
        .route(
            "/:id",
            get(get_buyer).patch(update_buyer).delete(delete_buyer),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/buyers",
    tag = "buyers",
    request_body = CreateBuyerRequest,
    responses(
        (status = 201, description = "Buyer created", body = crate::entities::buyer::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_buyer(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateBuyerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let buyer = state.services.buyers.create(payload).await?;
    Ok(created_response(buyer))
}

#[utoipa::path(
    get,
    path = "/api/v1/buyers",
    tag = "buyers",
    responses(
        (status = 200, description = "Every Buyer ordered by id", body = Vec<crate::entities::buyer::Model>)
    )
)]
pub async fn list_buyers(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let buyers = state.services.buyers.get_all().await?;
    Ok(success_response(buyers))
}

#[utoipa::path(
    get,
    path = "/api/v1/buyers/{id}",
    tag = "buyers",
    params(("id" = i32, Path, description = "Buyer id")),
    responses(
        (status = 200, description = "Buyer found", body = crate::entities::buyer::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Buyer not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_buyer(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let buyer = state.services.buyers.get_by_id(id).await?;
    Ok(success_response(buyer))
}

#[utoipa::path(
    patch,
    path = "/api/v1/buyers/{id}",
    tag = "buyers",
    params(("id" = i32, Path, description = "Buyer id")),
    request_body = UpdateBuyerRequest,
    responses(
        (status = 200, description = "Buyer updated", body = crate::entities::buyer::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Buyer not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_buyer(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateBuyerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let buyer = state.services.buyers.update(id, payload).await?;
    Ok(success_response(buyer))
}

#[utoipa::path(
    delete,
    path = "/api/v1/buyers/{id}",
    tag = "buyers",
    params(("id" = i32, Path, description = "Buyer id")),
    responses(
        (status = 204, description = "Buyer deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Buyer not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Buyer is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_buyer(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.buyers.delete(id).await?;
    Ok(no_content_response())
}

/// Purchase orders per buyer; `?id=` narrows to one buyer.
#[utoipa::path(
    get,
    path = "/api/v1/buyers/reportPurchaseOrders",
    tag = "buyers",
    params(("id" = Option<i32>, Query, description = "Narrow the report to one Buyer; the row is returned as an object")),
    responses(
        (status = 200, description = "Purchase orders per buyer", body = Vec<crate::dto::reports::BuyerPurchaseOrdersReport>),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Buyer not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn report_purchase_orders(
    State(state): State<AppState>,
    ReportId(id): ReportId,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.buyers.report_purchase_orders(id).await?;
    Ok(success_response(report))
}

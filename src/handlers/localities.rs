use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateLocalityRequest, UpdateLocalityRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, CodeParam,
    ReportCode, StrictJson,
};
use crate::AppState;

/// Creates the router for locality endpoints.
/// Localities are addressed by their own code rather than a surrogate id.
pub fn localities_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_locality).get(list_localities))
        .route("/reportSellers", get(report_sellers))
        .route("/reportCarries", get(report_carries))
        .route(
            "/:id",
            get(get_locality)
                .patch(update_locality)
                .delete(delete_locality),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/localities",
    tag = "localities",
    request_body = CreateLocalityRequest,
    responses(
        (status = 201, description = "Locality created", body = crate::entities::locality::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_locality(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateLocalityRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let locality = state.services.localities.create(payload).await?;
    Ok(created_response(locality))
}

#[utoipa::path(
    get,
    path = "/api/v1/localities",
    tag = "localities",
    responses(
        (status = 200, description = "Every Locality ordered by id", body = Vec<crate::entities::locality::Model>)
    )
)]
pub async fn list_localities(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let localities = state.services.localities.get_all().await?;
    Ok(success_response(localities))
}

#[utoipa::path(
    get,
    path = "/api/v1/localities/{id}",
    tag = "localities",
    params(("id" = String, Path, description = "Locality id")),
    responses(
        (status = 200, description = "Locality found", body = crate::entities::locality::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Locality not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_locality(
    State(state): State<AppState>,
    CodeParam(id): CodeParam,
) -> Result<impl IntoResponse, ServiceError> {
    let locality = state.services.localities.get_by_id(&id).await?;
    Ok(success_response(locality))
}

#[utoipa::path(
    patch,
    path = "/api/v1/localities/{id}",
    tag = "localities",
    params(("id" = String, Path, description = "Locality id")),
    request_body = UpdateLocalityRequest,
    responses(
        (status = 200, description = "Locality updated", body = crate::entities::locality::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Locality not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_locality(
    State(state): State<AppState>,
    CodeParam(id): CodeParam,
    StrictJson(payload): StrictJson<UpdateLocalityRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let locality = state.services.localities.update(&id, payload).await?;
    Ok(success_response(locality))
}

#[utoipa::path(
    delete,
    path = "/api/v1/localities/{id}",
    tag = "localities",
    params(("id" = String, Path, description = "Locality id")),
    responses(
        (status = 204, description = "Locality deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Locality not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Locality is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_locality(
    State(state): State<AppState>,
    CodeParam(id): CodeParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.localities.delete(&id).await?;
    Ok(no_content_response())
}

/// Sellers per locality. An existing locality with no sellers reports a zero count.
#[utoipa::path(
    get,
    path = "/api/v1/localities/reportSellers",
    tag = "localities",
    params(("id" = Option<String>, Query, description = "Narrow the report to one Locality; the row is returned as an object")),
    responses(
        (status = 200, description = "Sellers per locality", body = Vec<crate::dto::reports::LocalitySellersReport>),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Locality not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn report_sellers(
    State(state): State<AppState>,
    ReportCode(id): ReportCode,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.localities.report_sellers(id.as_deref()).await?;
    Ok(success_response(report))
}

#[utoipa::path(
    get,
    path = "/api/v1/localities/reportCarries",
    tag = "localities",
    params(("id" = Option<String>, Query, description = "Narrow the report to one Locality; the row is returned as an object")),
    responses(
        (status = 200, description = "Carries per locality", body = Vec<crate::dto::reports::LocalityCarriesReport>),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Locality not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn report_carries(
    State(state): State<AppState>,
    ReportCode(id): ReportCode,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.localities.report_carries(id.as_deref()).await?;
    Ok(success_response(report))
}

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateSectionRequest, UpdateSectionRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, ReportId,
    StrictJson,
};
use crate::AppState;

/// Creates the router for section endpoints
pub fn sections_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_section).get(list_sections))
        .route("/reportProducts", get(report_products))
        .route(
            "/:id",
            get(get_section).patch(update_section).delete(delete_section),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/sections",
    tag = "sections",
    request_body = CreateSectionRequest,
    responses(
        (status = 201, description = "Section created", body = crate::entities::section::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_section(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateSectionRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let section = state.services.sections.create(payload).await?;
    Ok(created_response(section))
}

#[utoipa::path(
    get,
    path = "/api/v1/sections",
    tag = "sections",
    responses(
        (status = 200, description = "Every Section ordered by id", body = Vec<crate::entities::section::Model>)
    )
)]
pub async fn list_sections(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let sections = state.services.sections.get_all().await?;
    Ok(success_response(sections))
}

#[utoipa::path(
    get,
    path = "/api/v1/sections/{id}",
    tag = "sections",
    params(("id" = i32, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section found", body = crate::entities::section::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Section not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_section(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let section = state.services.sections.get_by_id(id).await?;
    Ok(success_response(section))
}

#[utoipa::path(
    patch,
    path = "/api/v1/sections/{id}",
    tag = "sections",
    params(("id" = i32, Path, description = "Section id")),
    request_body = UpdateSectionRequest,
    responses(
        (status = 200, description = "Section updated", body = crate::entities::section::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Section not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_section(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateSectionRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let section = state.services.sections.update(id, payload).await?;
    Ok(success_response(section))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sections/{id}",
    tag = "sections",
    params(("id" = i32, Path, description = "Section id")),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Section not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Section is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_section(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.sections.delete(id).await?;
    Ok(no_content_response())
}

/// Product batches stored per section; `?id=` narrows to one section.
#[utoipa::path(
    get,
    path = "/api/v1/sections/reportProducts",
    tag = "sections",
    params(("id" = Option<i32>, Query, description = "Narrow the report to one Section; the row is returned as an object")),
    responses(
        (status = 200, description = "Product batches per section", body = Vec<crate::dto::reports::SectionProductsReport>),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Section not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn report_products(
    State(state): State<AppState>,
    ReportId(id): ReportId,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.sections.report_products(id).await?;
    Ok(success_response(report))
}

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::dto::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::errors::ServiceError;
use crate::handlers::common::{
    created_response, no_content_response, success_response, validate_input, IdParam, ReportId,
    StrictJson,
};
use crate::AppState;

/// Creates the router for employee endpoints
pub fn employees_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee).get(list_employees))
        .route("/reportInboundOrders", get(report_inbound_orders))
        .route(
            "/:id",
            get(get_employee).patch(update_employee).delete(delete_employee),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = crate::entities::employee::Model),
        (status = 400, description = "Malformed body or unknown field", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let employee = state.services.employees.create(payload).await?;
    Ok(created_response(employee))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Every Employee ordered by id", body = Vec<crate::entities::employee::Model>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let employees = state.services.employees.get_all().await?;
    Ok(success_response(employees))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = crate::entities::employee::Model),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Employee not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    let employee = state.services.employees.get_by_id(id).await?;
    Ok(success_response(employee))
}

#[utoipa::path(
    patch,
    path = "/api/v1/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = crate::entities::employee::Model),
        (status = 400, description = "Invalid Id or malformed body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Employee not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Unique value in use or missing parent", body = crate::errors::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    StrictJson(payload): StrictJson<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let employee = state.services.employees.update(id, payload).await?;
    Ok(success_response(employee))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Employee not Found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Employee is referenced by other records", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.employees.delete(id).await?;
    Ok(no_content_response())
}

/// Inbound orders registered per employee; `?id=` narrows to one employee.
#[utoipa::path(
    get,
    path = "/api/v1/employees/reportInboundOrders",
    tag = "employees",
    params(("id" = Option<i32>, Query, description = "Narrow the report to one Employee; the row is returned as an object")),
    responses(
        (status = 200, description = "Inbound orders per employee", body = Vec<crate::dto::reports::EmployeeInboundOrdersReport>),
        (status = 400, description = "Invalid Id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Employee not Found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn report_inbound_orders(
    State(state): State<AppState>,
    ReportId(id): ReportId,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.employees.report_inbound_orders(id).await?;
    Ok(success_response(report))
}

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;
use utoipa::IntoParams;
use validator::Validate;

use crate::errors::{ServiceError, ServiceResult, INVALID_ID, INVALID_JSON_BODY};

/// Success envelope: every JSON payload is wrapped under `data`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(DataResponse { data })).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(DataResponse { data })).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ServiceError> {
    input.validate().map_err(ServiceError::from)
}

/// JSON body extractor whose every rejection (bad syntax, wrong content type,
/// unknown or mistyped field) is a 400 with the shared error body.
///
/// Unknown fields are rejected by `#[serde(deny_unknown_fields)]` on the target type.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(StrictJson(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "rejected request body");
                Err(ServiceError::BadRequest(INVALID_JSON_BODY.to_string()))
            }
        }
    }
}

/// Parses a surrogate id; anything but a positive integer is rejected.
pub fn parse_id(raw: &str) -> ServiceResult<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ServiceError::BadRequest(INVALID_ID.to_string()))
}

/// Parses a natural string key such as a locality code.
pub fn parse_code(raw: &str) -> ServiceResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::BadRequest(INVALID_ID.to_string()));
    }
    Ok(trimmed.to_string())
}

async fn raw_path_id<S: Send + Sync>(parts: &mut Parts, state: &S) -> ServiceResult<String> {
    Path::<String>::from_request_parts(parts, state)
        .await
        .map(|Path(raw)| raw)
        .map_err(|_| ServiceError::BadRequest(INVALID_ID.to_string()))
}

/// `/:id` path segment holding a surrogate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_path_id(parts, state).await?;
        parse_id(&raw).map(IdParam)
    }
}

/// `/:id` path segment holding a natural string key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeParam(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for CodeParam
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_path_id(parts, state).await?;
        parse_code(&raw).map(CodeParam)
    }
}

/// Query string of the report endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReportQuery {
    /// Restricts the report to one row.
    pub id: Option<String>,
}

fn report_query(parts: &Parts) -> ServiceResult<ReportQuery> {
    Query::<ReportQuery>::try_from_uri(&parts.uri)
        .map(|Query(query)| query)
        .map_err(|_| ServiceError::BadRequest(INVALID_ID.to_string()))
}

/// Optional `?id=` of a report over a resource with surrogate ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportId(pub Option<i32>);

#[async_trait]
impl<S> FromRequestParts<S> for ReportId
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = report_query(parts)?;
        query.id.as_deref().map(parse_id).transpose().map(ReportId)
    }
}

/// Optional `?id=` of a report over a resource with string keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCode(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for ReportCode
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = report_query(parts)?;
        query.id.as_deref().map(parse_code).transpose().map(ReportCode)
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::tracing::{current_request_id, RequestId};

/// Message returned for every masked internal failure.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";
/// Message returned when a request body cannot be decoded or validated.
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";
/// Message returned when a path or query id is malformed.
pub const INVALID_ID: &str = "Invalid Id";

/// Error body shared by every resource
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "Conflict",
    "message": "CardNumberId already in use"
}))]
pub struct ErrorResponse {
    /// Reason phrase of the HTTP status (e.g. "Not Found")
    #[schema(example = "Not Found")]
    pub status: String,
    /// Short, domain-level description
    #[schema(example = "Buyer not Found")]
    pub message: String,
}

/// Closed set of failure kinds produced by repositories, services and handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Input that cannot be parsed or breaks a shape rule at the edge.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Well-formed input failing semantic validation.
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness or referential violation.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Anything else. The payload is logged, never returned to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// `"<entity> not Found"`, the message every resource uses for absent rows.
    pub fn not_found(entity: &str) -> Self {
        ServiceError::NotFound(format!("{} not Found", entity))
    }

    pub fn internal(detail: impl std::fmt::Display) -> Self {
        ServiceError::Internal(detail.to_string())
    }

    /// Returns the HTTP status code for this error.
    /// This is the single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error message suitable for HTTP responses.
    /// Internal errors return a generic message to avoid leaking storage details.
    pub fn response_message(&self) -> String {
        match self {
            Self::BadRequest(msg)
            | Self::UnprocessableEntity(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg) => msg.clone(),
            Self::Internal(_) => INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::UnprocessableEntity(
            first_validation_message(&errors).unwrap_or_else(|| INVALID_JSON_BODY.to_string()),
        )
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Internal(format!("{:#}", err))
    }
}

/// Picks the first declared message out of a validation report, ordered by field name
/// so the response is stable across runs.
pub fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().copied().collect();
    fields.sort_unstable();

    fields.into_iter().find_map(|field| {
        field_errors[field]
            .iter()
            .find_map(|err| err.message.as_ref().map(|msg| msg.to_string()))
    })
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ServiceError::Internal(detail) = &self {
            let request_id = current_request_id();
            error!(
                error = %detail,
                request_id = request_id.as_ref().map(RequestId::as_str).unwrap_or("-"),
                "request failed with an internal error"
            );
        }

        let body = ErrorResponse {
            status: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            message: self.response_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use rstest::rstest;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[rstest]
    #[case(ServiceError::BadRequest("x".into()), StatusCode::BAD_REQUEST)]
    #[case(ServiceError::UnprocessableEntity("x".into()), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND)]
    #[case(ServiceError::Conflict("x".into()), StatusCode::CONFLICT)]
    #[case(ServiceError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_mapping(#[case] err: ServiceError, #[case] expected: StatusCode) {
        assert_eq!(err.status_code(), expected);
    }

    #[test]
    fn internal_message_is_masked() {
        let err = ServiceError::Internal("Duplicate entry 'x' for key 'buyers.card'".into());
        assert_eq!(err.response_message(), "Internal Server Error");

        let err = ServiceError::from(DbErr::Custom("connection reset".into()));
        assert_eq!(err.response_message(), "Internal Server Error");
    }

    #[test]
    fn user_facing_messages_pass_through() {
        assert_eq!(
            ServiceError::not_found("Buyer").response_message(),
            "Buyer not Found"
        );
        assert_eq!(
            ServiceError::Conflict("CardNumberId already in use".into()).response_message(),
            "CardNumberId already in use"
        );
    }

    #[tokio::test]
    async fn internal_error_in_request_scope_stays_masked() {
        let response = crate::tracing::scope_request_id(RequestId::new("req-9"), async {
            ServiceError::Internal("disk full".into()).into_response()
        })
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["message"], "Internal Server Error");
    }

    #[tokio::test]
    async fn response_body_uses_status_text_and_message() {
        let response = ServiceError::Conflict("CardNumberId already in use".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.headers()[http::header::CONTENT_TYPE],
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            payload,
            json!({"status": "Conflict", "message": "CardNumberId already in use"})
        );
    }

    #[test]
    fn validation_errors_prefer_declared_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("last_name", ValidationError::new("letters"));
        let mut with_message = ValidationError::new("range");
        with_message.message = Some(Cow::from("card_number_id must have 8 digits"));
        errors.add("card_number_id", with_message);

        assert_eq!(
            ServiceError::from(errors),
            ServiceError::UnprocessableEntity("card_number_id must have 8 digits".into())
        );
    }

    #[test]
    fn validation_errors_without_messages_fall_back() {
        let mut errors = ValidationErrors::new();
        errors.add("first_name", ValidationError::new("letters"));
        assert_eq!(
            ServiceError::from(errors),
            ServiceError::UnprocessableEntity(INVALID_JSON_BODY.into())
        );
    }
}

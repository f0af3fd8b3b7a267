//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service and repository layers returns
//! [`AppError`]. Handlers propagate it with `?` and axum renders it through
//! the [`IntoResponse`] implementation below.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Machine-readable error code used in response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details } => (message, details),
            // Internal details stay in the logs.
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed with internal error");
                ("Server Error".to_string(), Value::Null)
            }
        };

        let body = ErrorBody {
            message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| "Invalid request".to_string());

        let fields: serde_json::Map<String, Value> = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors
                    .iter()
                    .filter_map(|error| error.message.as_ref().map(ToString::to_string))
                    .collect();
                (to_camel_case(&field), json!(messages))
            })
            .collect();

        AppError::bad_request(message, json!({ "fields": fields }))
    }
}

/// Request bodies are camelCase; field errors are reported the same way.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Request body must be a JSON object",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("original_url"), "originalUrl");
        assert_eq!(to_camel_case("url"), "url");
    }

    #[tokio::test]
    async fn test_validation_errors_use_camel_case_fields() {
        use crate::api::dto::shorten::ShortenRequest;
        use validator::Validate;

        let request: ShortenRequest = serde_json::from_value(json!({})).unwrap();
        let err: AppError = request.validate().unwrap_err().into();

        let json = body_json(err.into_response()).await;
        assert_eq!(json["message"], "URL is required");
        assert_eq!(
            json["details"]["fields"]["originalUrl"],
            json!(["URL is required"])
        );
        assert!(json["details"]["fields"].get("original_url").is_none());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::internal("x", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("URL not found", json!({ "code": "abc" }));
        assert_eq!(err.to_string(), "URL not found");
    }

    #[tokio::test]
    async fn test_validation_response_body() {
        let response = AppError::bad_request("URL is required", Value::Null).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "URL is required");
        assert_eq!(json["code"], "validation_error");
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn test_internal_response_hides_details() {
        let response = AppError::internal(
            "Database error",
            json!({ "reason": "connection refused on 10.0.0.5" }),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Server Error");
        assert_eq!(json["code"], "internal_error");
        assert!(json.get("details").is_none());
    }
}

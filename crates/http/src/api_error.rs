//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and status
//! code. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use unionboard_core::{ADMIN_REALM, ValidationError};
use unionboard_service::ServiceError;

/// API error with HTTP status code and JSON body `{"error": ...}`.
///
/// `StoreUnavailable` and `Internal` log the real error server-side and
/// return a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 422: malformed payload; names the offending field when known.
    Validation(ValidationError),
    /// 401: missing or wrong admin credentials.
    Unauthorized,
    /// 404: mutation target or resource does not exist.
    NotFound,
    /// 503: the issue store could not be reached.
    StoreUnavailable(String),
    /// 500: unexpected failure.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                let body = serde_json::json!({"error": err.message, "field": err.field});
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            },
            Self::Unauthorized => {
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({"error": "authentication required"})),
                )
                    .into_response();
                if let Ok(challenge) =
                    HeaderValue::from_str(&format!("Basic realm=\"{ADMIN_REALM}\""))
                {
                    response.headers_mut().insert(header::WWW_AUTHENTICATE, challenge);
                }
                response
            },
            Self::NotFound => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "not found"})))
                    .into_response()
            },
            Self::StoreUnavailable(detail) => {
                tracing::error!(%detail, "issue store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({"error": "store unavailable"})),
                )
                    .into_response()
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "internal server error"})),
                )
                    .into_response()
            },
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else if err.is_store_unavailable() {
            Self::StoreUnavailable(err.to_string())
        } else {
            Self::Internal(err.into())
        }
    }
}

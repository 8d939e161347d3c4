//! HTTP error response mapping.

use std::error::Error;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use innkeep_domain::error::InnkeepError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by a service or the domain.
    Domain(InnkeepError),
    /// The request could not be parsed (bad JSON, bad identifier).
    Malformed(String),
}

impl From<InnkeepError> for ApiError {
    fn from(err: InnkeepError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Malformed(_) => (StatusCode::BAD_REQUEST, "malformed"),
            Self::Domain(InnkeepError::Validation(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation")
            }
            Self::Domain(InnkeepError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            Self::Domain(InnkeepError::OwnershipMismatch(_)) => {
                (StatusCode::FORBIDDEN, "ownership_mismatch")
            }
            Self::Domain(InnkeepError::Conflict(_)) => (StatusCode::CONFLICT, "conflict"),
            Self::Domain(InnkeepError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        let message = match self {
            Self::Malformed(message) => message,
            Self::Domain(InnkeepError::Storage(err)) => {
                tracing::error!(error = %err, cause = ?err.source(), "storage error");
                "internal server error".to_string()
            }
            Self::Domain(err) => err.to_string(),
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                kind,
            }),
        )
            .into_response()
    }
}

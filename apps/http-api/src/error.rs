//! HTTP error responses.
//!
//! Every failure is answered with a JSON body `{"detail": "..."}`.
//!
//! ```text
//! StoreError::Validation   → 422
//! StoreError::NotFound     → 404  "Product not found"
//! StoreError::Conflict     → 409
//! StoreError::Persistence  → 500  (details logged, not returned)
//! Extractor rejection      → status chosen by axum (400 / 415 / 422)
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use inventory_core::{ProductId, StoreError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Product not found")]
    NotFound,

    #[error("Product {0} already exists")]
    Conflict(ProductId),

    #[error("Internal server error")]
    Internal(String),

    /// Request could not be extracted (bad path id, malformed JSON).
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => ApiError::Validation(e),
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Conflict(id) => ApiError::Conflict(id),
            StoreError::Persistence(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref msg) = self {
            tracing::error!(error = %msg, "Store operation failed");
        }

        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_status_mapping() {
        let cases = [
            (
                StoreError::Validation(ValidationError::NegativeQuantity(-1)),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (StoreError::NotFound(1), StatusCode::NOT_FOUND),
            (StoreError::Conflict(1), StatusCode::CONFLICT),
            (
                StoreError::persistence("disk I/O error"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_internal_detail_is_generic() {
        let err = ApiError::from(StoreError::persistence("disk I/O error"));
        assert_eq!(err.to_string(), "Internal server error");
    }
}

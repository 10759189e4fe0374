use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use service::order::ValidationError;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::metrics;

/// Errors surfaced to HTTP clients; every variant renders as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    BadRequest(#[from] ValidationError),
    #[error("Order '{0}' already exists.")]
    Conflict(String),
    /// Detail is logged, never returned.
    #[error("Internal server error.")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        debug!(error_code = e.code(), error = %e, "service_error");
        match e {
            ServiceError::Validation(v) => ApiError::BadRequest(v),
            ServiceError::Conflict(id) => ApiError::Conflict(id),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(v) => {
                warn!(error = %v, "order_rejected");
                metrics::ORDERS_REJECTED_TOTAL.with_label_values(&["validation"]).inc();
            }
            ApiError::Conflict(id) => {
                metrics::ORDERS_REJECTED_TOTAL.with_label_values(&["conflict"]).inc();
                warn!(order_id = %id, "order_rejected_duplicate");
            }
            ApiError::Internal(detail) => {
                metrics::STORAGE_ERRORS_TOTAL.inc();
                error!(error = %detail, "storage error");
            }
        }
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("schema setup failed: {0}")]
    Migration(String),
}

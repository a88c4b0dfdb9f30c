//! HTTP error mapping.
//!
//! Domain errors stay transport-agnostic; this is the one place that knows
//! which status code each one gets. Bodies are `{"detail": "..."}`.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domains::access::AccessError;
use crate::domains::export::ExportError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// Body missing, not JSON, or the wrong shape
    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),

    /// Query string missing a field or carrying an unparsable value
    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Access(AccessError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Access(AccessError::Unauthorized) => StatusCode::FORBIDDEN,
            ApiError::Access(AccessError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Access(AccessError::AlreadyProcessed) => StatusCode::BAD_REQUEST,
            ApiError::Access(AccessError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Export(ExportError::UnknownRegion(_) | ExportError::EmptySelection) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Export(ExportError::Render(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Json(_) | ApiError::Query(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

// API errors - request bodies that never reach the normalizer
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("failed to encode response")]
    Encoding(StatusCode),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Encoding(status) => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, "request failed: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

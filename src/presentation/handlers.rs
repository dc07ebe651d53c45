// HTTP request handlers
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

static NULL: Value = Value::Null;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Normalize a whole dashboard specification.
///
/// Body: `{"spec": <any>, "available_columns": [..]}`; `dashboard` is accepted
/// in place of `spec`.
pub async fn normalize_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response<Body>, ApiError> {
    let Json(body) = body?;
    let spec = field(&body, "spec").or_else(|| field(&body, "dashboard"));
    let dashboard = state.dashboard_service.normalize_dashboard(
        spec.unwrap_or(&NULL),
        field(&body, "available_columns").unwrap_or(&NULL),
    );

    respond(&state, &headers, &dashboard).await
}

/// Normalize a single component descriptor.
pub async fn normalize_component(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response<Body>, ApiError> {
    let Json(body) = body?;
    let component = state.dashboard_service.normalize_component(
        field(&body, "component").unwrap_or(&NULL),
        field(&body, "available_columns").unwrap_or(&NULL),
    );

    respond(&state, &headers, &component).await
}

/// Reshape rows into `{x, y}` points for the two selected columns.
pub async fn project_rows(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response<Body>, ApiError> {
    let Json(body) = body?;
    let projection = state.dashboard_service.project_rows(
        field(&body, "rows").unwrap_or(&NULL),
        field(&body, "config").unwrap_or(&NULL),
    );

    respond(&state, &headers, &projection).await
}

fn field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.as_object()?.get(key)
}

async fn respond<T: Serialize>(
    state: &AppState,
    headers: &HeaderMap,
    data: &T,
) -> Result<Response<Body>, ApiError> {
    let compress = state.compress_responses && accepts_brotli(headers);
    json_response(data, compress)
        .await
        .map_err(ApiError::Encoding)
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use super::AppState;
use crate::domain::receipt::{PointsResponse, ProcessResponse, Receipt};
use crate::error::ReceiptError;

// Client-facing messages. Deliberately uniform: the response never reveals
// which validation rule failed.
const INVALID_RECEIPT_MSG: &str = "The receipt is invalid.";
const NOT_FOUND_MSG: &str = "No receipt found for that ID.";

/// `ReceiptError` adapted to an HTTP response.
pub struct ApiError(ReceiptError);

impl From<ReceiptError> for ApiError {
    fn from(err: ReceiptError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ReceiptError::Validation(kind) => {
                tracing::warn!(%kind, "rejected invalid receipt");
                (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MSG).into_response()
            }
            ReceiptError::MalformedInput(detail) => {
                tracing::warn!(detail, "rejected malformed receipt payload");
                (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MSG).into_response()
            }
            ReceiptError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MSG).into_response(),
        }
    }
}

/// POST /receipts/process
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) =
        payload.map_err(|rejection| ReceiptError::MalformedInput(rejection.body_text()))?;

    let id = state.processor.process_receipt(receipt).await?;
    state.metrics.record_receipt_processed();

    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.processor.get_points(&id).await.map_err(|err| {
        if matches!(err, ReceiptError::NotFound) {
            tracing::warn!(%id, "points lookup for unknown receipt");
        }
        err
    })?;
    state.metrics.record_points_lookup();

    Ok(Json(PointsResponse { points }))
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.metrics.to_json())
}

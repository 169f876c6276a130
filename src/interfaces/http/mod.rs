//! HTTP boundary: routing, handlers and request metrics.

pub mod handlers;
pub mod metrics;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::processor::ReceiptProcessor;
use metrics::ServiceMetrics;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<ReceiptProcessor>,
    pub metrics: Arc<ServiceMetrics>,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
            metrics: Arc::new(ServiceMetrics::new()),
        }
    }
}

/// Builds the service router with tracing, timeout and metrics layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            metrics::track_requests,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

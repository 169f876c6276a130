use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use super::AppState;

/// Request-level service metrics.
///
/// Plain atomic counters, exported as a JSON snapshot at `/metrics`. Shared
/// through `AppState` rather than a process-wide singleton.
#[derive(Default)]
pub struct ServiceMetrics {
    pub requests_total: AtomicU64,
    pub requests_success: AtomicU64,
    pub requests_error: AtomicU64,

    pub receipts_processed: AtomicU64,
    pub points_lookups: AtomicU64,

    // Cumulative latency; averaged on export.
    total_latency_ms: AtomicU64,
    latency_samples: AtomicU64,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self, success: bool, latency_ms: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if success {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.requests_error.fetch_add(1, Ordering::Relaxed);
        }
        self.total_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
        self.latency_samples.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_receipt_processed(&self) {
        self.receipts_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_points_lookup(&self) {
        self.points_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        let count = self.latency_samples.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "requests": {
                "total": self.requests_total.load(Ordering::Relaxed),
                "success": self.requests_success.load(Ordering::Relaxed),
                "error": self.requests_error.load(Ordering::Relaxed),
            },
            "receipts": {
                "processed": self.receipts_processed.load(Ordering::Relaxed),
                "points_lookups": self.points_lookups.load(Ordering::Relaxed),
            },
            "latency": {
                "average_ms": self.average_latency_ms(),
            }
        })
    }
}

/// Middleware recording count, outcome and latency for every request.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let success = !response.status().is_server_error() && !response.status().is_client_error();
    state.metrics.record_request(success, latency_ms);

    response
}

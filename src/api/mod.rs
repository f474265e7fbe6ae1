//! Counter API endpoints
//!
//! `POST /api/visit` increments the counter; `GET /api/visits` reads
//! it. Neither endpoint inspects headers or body.

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

/// POST /api/visit — increment and persist the counter
///
/// The response reports the new in-memory total even when the persist
/// failed; durable storage is best-effort.
pub async fn handle_visit(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let total = state.counter.increment().await;
    logger::log_api_request("POST", "/api/visit", 200);

    let body = serde_json::json!({ "success": true, "total": total });
    http::build_json_response(body.to_string())
}

/// GET /api/visits — read the current total, no side effects
pub async fn handle_visits(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let total = state.counter.current().await;
    logger::log_api_request("GET", "/api/visits", 200);

    let body = serde_json::json!({ "total": total });
    http::build_json_response(body.to_string())
}

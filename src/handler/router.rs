//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Requests are classified by
//! (method, path): the two counter endpoints are handled by the API
//! module, everything else falls through to static file serving.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for static serving
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Where a request is dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// POST /api/visit — mutate the counter
    IncrementVisit,
    /// GET /api/visits — read-only, side-effect-free
    ReadVisits,
    /// Everything else — delegate to the static file resolver
    StaticFile,
}

/// Classify a request by method and path
///
/// Only the two exact counter endpoints are special-cased; unknown
/// API-shaped paths fall through to static serving like any other path.
pub fn classify(method: &Method, path: &str) -> RouteDecision {
    match (method, path) {
        (&Method::POST, "/api/visit") => RouteDecision::IncrementVisit,
        (&Method::GET, "/api/visits") => RouteDecision::ReadVisits,
        _ => RouteDecision::StaticFile,
    }
}

/// Main entry point for HTTP request handling
///
/// Request bodies are ignored for every route, the API endpoints
/// included; no header validation or authentication is performed.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(method, uri, req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let response = match classify(method, path) {
        RouteDecision::IncrementVisit => api::handle_visit(&state).await,
        RouteDecision::ReadVisits => api::handle_visits(&state).await,
        RouteDecision::StaticFile => {
            let ctx = RequestContext {
                path,
                is_head,
                access_log,
            };
            static_files::serve(&ctx, &state.config.resources).await
        }
    };

    Ok(response)
}

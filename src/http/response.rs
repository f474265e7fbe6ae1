//! HTTP response building module
//!
//! Provides builders for the response shapes the server produces,
//! decoupled from specific business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const NOT_FOUND_BODY: &str = "<h1>404 - File Not Found</h1>";

/// Build 200 JSON response
pub fn build_json_response(body: String) -> Response<Full<Bytes>> {
    let content_length = body.len();

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 static file response with caching disabled
///
/// Every static response carries the three no-cache headers so clients
/// and proxies always revalidate against the server.
pub fn build_static_file_response(
    data: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
        .header("Expires", "0")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/html")
        .body(Full::new(Bytes::from(NOT_FOUND_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(NOT_FOUND_BODY)))
        })
}

/// Build 500 Internal Server Error response with the underlying error kind
pub fn build_500_response(error_kind: &str) -> Response<Full<Bytes>> {
    let body = format!("Server Error: {error_kind}");

    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response_headers() {
        let resp = build_json_response(r#"{"total":0}"#.to_string());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(resp.headers()["Content-Length"], "11");
    }

    #[test]
    fn test_static_response_disables_caching() {
        let resp = build_static_file_response(b"body { }".to_vec(), "text/css", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(
            resp.headers()["Cache-Control"],
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(resp.headers()["Pragma"], "no-cache");
        assert_eq!(resp.headers()["Expires"], "0");
    }

    #[test]
    fn test_head_response_keeps_content_length() {
        let resp = build_static_file_response(b"hello".to_vec(), "text/plain", true);
        assert_eq!(resp.headers()["Content-Length"], "5");
    }

    #[test]
    fn test_404_response() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
    }

    #[test]
    fn test_500_response_carries_error_kind() {
        let resp = build_500_response("permission denied");
        assert_eq!(resp.status(), 500);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }
}

//! Static file serving module
//!
//! Maps URL paths to files under the configured web root and builds
//! the corresponding responses. Every successful response disables
//! client and proxy caching.

use crate::config::ResourcesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a static file for the given request path
pub async fn serve(ctx: &RequestContext<'_>, resources: &ResourcesConfig) -> Response<Full<Bytes>> {
    let file_path = resolve_path(&resources.web_root, ctx.path, &resources.default_document);

    if escapes_root(&resources.web_root, &file_path) {
        logger::log_warning(&format!("Path traversal attempt blocked: {}", ctx.path));
        return http::build_404_response();
    }

    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type =
                mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            http::build_static_file_response(content, content_type, ctx.is_head)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if ctx.access_log {
                logger::log_response(404, 0);
            }
            http::build_404_response()
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            http::build_500_response(&format!("{:?}", e.kind()))
        }
    }
}

/// Map a request path to a filesystem path under the web root
///
/// `/` resolves to the default document; parent-directory components
/// are stripped before joining.
fn resolve_path(web_root: &str, request_path: &str, default_document: &str) -> PathBuf {
    let clean = request_path.trim_start_matches('/').replace("..", "");
    let relative = if clean.is_empty() {
        default_document
    } else {
        clean.as_str()
    };
    Path::new(web_root).join(relative)
}

/// Check whether the resolved path escapes the web root
///
/// Both paths are canonicalized; a path that cannot be canonicalized
/// (typically because it does not exist yet) is left for the read to
/// reject with its own error.
fn escapes_root(web_root: &str, file_path: &Path) -> bool {
    match (Path::new(web_root).canonicalize(), file_path.canonicalize()) {
        (Ok(root), Ok(file)) => !file.starts_with(&root),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::fs as std_fs;

    fn temp_web_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("visitd-webroot-{}-{name}", std::process::id()));
        std_fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_root_resolves_to_default_document() {
        let path = resolve_path("public", "/", "index.html");
        assert_eq!(path, Path::new("public").join("index.html"));
    }

    #[test]
    fn test_plain_path_joins_web_root() {
        let path = resolve_path("public", "/css/app.css", "index.html");
        assert_eq!(path, Path::new("public").join("css/app.css"));
    }

    #[test]
    fn test_parent_components_are_stripped() {
        let path = resolve_path("public", "/../../etc/passwd", "index.html");
        assert!(!path.to_string_lossy().contains(".."));
    }

    #[tokio::test]
    async fn test_serve_existing_file() {
        let root = temp_web_root("hit");
        std_fs::write(root.join("index.html"), "<h1>hello</h1>").unwrap();

        let ctx = RequestContext {
            path: "/",
            is_head: false,
            access_log: false,
        };
        let resources = ResourcesConfig {
            web_root: root.to_string_lossy().into_owned(),
            default_document: "index.html".to_string(),
        };

        let resp = serve(&ctx, &resources).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(
            resp.headers()["Cache-Control"],
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(resp.headers()["Pragma"], "no-cache");
        assert_eq!(resp.headers()["Expires"], "0");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<h1>hello</h1>");

        let _ = std_fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_serve_missing_file_is_404() {
        let root = temp_web_root("miss");

        let ctx = RequestContext {
            path: "/no-such-file.html",
            is_head: false,
            access_log: false,
        };
        let resources = ResourcesConfig {
            web_root: root.to_string_lossy().into_owned(),
            default_document: "index.html".to_string(),
        };

        let resp = serve(&ctx, &resources).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/html");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<h1>404 - File Not Found</h1>");

        let _ = std_fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_escaping_path_is_blocked() {
        let root = temp_web_root("escape");

        // Collapses to an absolute path outside the web root
        let ctx = RequestContext {
            path: "/../../etc/passwd",
            is_head: false,
            access_log: false,
        };
        let resources = ResourcesConfig {
            web_root: root.to_string_lossy().into_owned(),
            default_document: "index.html".to_string(),
        };

        let resp = serve(&ctx, &resources).await;
        assert_eq!(resp.status(), 404);

        let _ = std_fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_head_request_omits_body() {
        let root = temp_web_root("head");
        std_fs::write(root.join("data.json"), r#"{"k":1}"#).unwrap();

        let ctx = RequestContext {
            path: "/data.json",
            is_head: true,
            access_log: false,
        };
        let resources = ResourcesConfig {
            web_root: root.to_string_lossy().into_owned(),
            default_document: "index.html".to_string(),
        };

        let resp = serve(&ctx, &resources).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(resp.headers()["Content-Length"], "7");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        let _ = std_fs::remove_dir_all(&root);
    }
}

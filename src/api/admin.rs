// Admin UI - embedded single-page front-end for page management

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Serve the admin HTML page
pub fn serve_admin() -> Response<Full<Bytes>> {
    let html = include_str!("admin.html");

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Cache-Control", "no-cache")
        .body(Full::new(Bytes::from(html)))
        .unwrap_or_else(|e| {
            crate::logger::log_error(&format!("Failed to build admin response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

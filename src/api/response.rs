// API response utility functions module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;

use super::types::ErrorResponse;
use crate::logger;
use crate::pages::PageError;

/// Build JSON response
#[allow(clippy::unnecessary_wraps)]
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Ok(internal_error());
        }
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        }))
}

/// HTTP status for a page error: the taxonomy is fully recoverable at this
/// boundary; anything outside it is a generic 500 with no detail leaked.
pub const fn status_for(err: &PageError) -> StatusCode {
    match err {
        PageError::Validation(_) => StatusCode::BAD_REQUEST,
        PageError::Conflict(_) => StatusCode::CONFLICT,
        PageError::NotFound(_) => StatusCode::NOT_FOUND,
        PageError::Io(_) | PageError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a page error to its JSON error response
pub fn error_response(err: &PageError) -> Response<Full<Bytes>> {
    let status = status_for(err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        logger::log_error(&format!("page operation failed: {err}"));
        return internal_error();
    }
    error_with_status(status, &err.to_string())
}

/// Build an error response with an explicit status
pub fn error_with_status(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = ErrorResponse::new(message);
    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}

/// 400 Bad Request response
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    error_with_status(StatusCode::BAD_REQUEST, message)
}

/// 500 Internal Server Error response (generic body, detail stays in logs)
pub fn internal_error() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(r#"{"error":"internal error"}"#)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}

/// 404 for unknown API routes
pub fn unknown_endpoint() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(
            r#"{"error":"Not Found","available_endpoints":["/api/list","/api/content/:slug","/api/new","/api/edit","/api/delete"]}"#,
        )))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Not Found"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_expected_statuses() {
        assert_eq!(
            status_for(&PageError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&PageError::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&PageError::NotFound("missing".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&PageError::Io(std::io::Error::other("disk"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn io_errors_leak_no_detail() {
        let resp = error_response(&PageError::Io(std::io::Error::other("secret path")));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body-size
//! limits, then dispatch. Reserved paths (`/api/*`, `/admin`) are matched
//! ahead of dynamic page routes, so no page slug can shadow them.

use crate::api;
use crate::config::AppState;
use crate::handler::pages;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context for page serving
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.config.logging.access_log;

    // Everything the access log needs, captured before the request body is
    // consumed by a handler
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version()).to_string();
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");

    let response = dispatch(req, &method, &path, &state, access_log).await?;

    if access_log {
        let mut entry =
            AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length_of(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a request: gates first, then reserved paths, then dynamic pages
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    method: &Method,
    path: &str,
    state: &Arc<AppState>,
    access_log: bool,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. Log headers if enabled
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // 4. Reserved paths before dynamic page routes
    if path == "/api" || path.starts_with("/api/") {
        return api::handle_api_request(req, Arc::clone(state)).await;
    }

    // POST is only meaningful on the API surface
    if *method == Method::POST {
        return Ok(http::build_405_response());
    }

    if path == "/admin" || path == "/admin/" {
        return Ok(api::serve_admin());
    }

    // 5. Dynamic page route
    let ctx = RequestContext {
        path,
        is_head: *method == Method::HEAD,
        if_none_match: header_string(&req, "if-none-match"),
        access_log,
    };
    Ok(pages::serve_page(&ctx, state).await)
}

/// Check HTTP method and return appropriate response for unsupported methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD | Method::POST => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

fn content_length_of(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

// API handlers module
// One function per endpoint; each normalizes input once, calls the page
// manager, and maps the result onto the HTTP status space.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use super::response::{bad_request, error_response, json_response, status_for};
use super::types::{ContentResponse, ListResponse, OkResponse, PageRequest};
use crate::config::AppState;
use crate::logger;
use crate::pages::slug;

/// GET /api/list
pub async fn handle_list(state: Arc<AppState>) -> Result<Response<Full<Bytes>>, Infallible> {
    match state.pages.list().await {
        Ok(webs) => {
            logger::log_api_request("GET", "/api/list", 200);
            json_response(StatusCode::OK, &ListResponse { webs })
        }
        Err(err) => {
            logger::log_api_request("GET", "/api/list", status_for(&err).as_u16());
            Ok(error_response(&err))
        }
    }
}

/// GET /api/content/:slug
pub async fn handle_content(
    raw_slug: &str,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = format!("/api/content/{raw_slug}");
    let slug = raw_slug.to_lowercase();
    if slug.is_empty() {
        logger::log_api_request("GET", &path, 400);
        return Ok(bad_request("slug required"));
    }

    match state.pages.read_content(&slug).await {
        Ok(Some(html)) => {
            logger::log_api_request("GET", &path, 200);
            json_response(StatusCode::OK, &ContentResponse { html })
        }
        Ok(None) => {
            logger::log_api_request("GET", &path, 404);
            Ok(super::response::error_with_status(
                StatusCode::NOT_FOUND,
                &format!("page '{slug}' not found"),
            ))
        }
        Err(err) => {
            logger::log_api_request("GET", &path, status_for(&err).as_u16());
            Ok(error_response(&err))
        }
    }
}

/// POST /api/new
pub async fn handle_new(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let body = match parse_body(req).await {
        Ok(body) => body,
        Err(resp) => {
            logger::log_api_request("POST", "/api/new", 400);
            return Ok(resp);
        }
    };

    let slug = slug::normalize(&body.slug);
    if slug.is_empty() {
        logger::log_api_request("POST", "/api/new", 400);
        return Ok(bad_request("slug required"));
    }

    match state.pages.create(&slug, &body.html).await {
        Ok(()) => {
            logger::log_api_request("POST", "/api/new", 201);
            json_response(StatusCode::CREATED, &OkResponse::new())
        }
        Err(err) => {
            logger::log_api_request("POST", "/api/new", status_for(&err).as_u16());
            Ok(error_response(&err))
        }
    }
}

/// POST /api/edit
pub async fn handle_edit(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let body = match parse_body(req).await {
        Ok(body) => body,
        Err(resp) => {
            logger::log_api_request("POST", "/api/edit", 400);
            return Ok(resp);
        }
    };

    let slug = slug::normalize(&body.slug);
    if slug.is_empty() {
        logger::log_api_request("POST", "/api/edit", 400);
        return Ok(bad_request("slug required"));
    }

    match state.pages.edit(&slug, &body.html).await {
        Ok(()) => {
            logger::log_api_request("POST", "/api/edit", 200);
            json_response(StatusCode::OK, &OkResponse::new())
        }
        Err(err) => {
            logger::log_api_request("POST", "/api/edit", status_for(&err).as_u16());
            Ok(error_response(&err))
        }
    }
}

/// POST /api/delete
pub async fn handle_delete(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let body = match parse_body(req).await {
        Ok(body) => body,
        Err(resp) => {
            logger::log_api_request("POST", "/api/delete", 400);
            return Ok(resp);
        }
    };

    let slug = slug::normalize(&body.slug);
    if slug.is_empty() {
        logger::log_api_request("POST", "/api/delete", 400);
        return Ok(bad_request("slug required"));
    }

    match state.pages.delete(&slug).await {
        Ok(()) => {
            logger::log_api_request("POST", "/api/delete", 200);
            json_response(StatusCode::OK, &OkResponse::new())
        }
        Err(err) => {
            logger::log_api_request("POST", "/api/delete", status_for(&err).as_u16());
            Ok(error_response(&err))
        }
    }
}

/// Read and parse a JSON request body
async fn parse_body(
    req: Request<hyper::body::Incoming>,
) -> Result<PageRequest, Response<Full<Bytes>>> {
    let whole_body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Err(bad_request("failed to read request body")),
    };

    serde_json::from_slice(&whole_body).map_err(|e| bad_request(&format!("invalid JSON: {e}")))
}

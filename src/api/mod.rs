// API module entry
// JSON page-management API mounted under /api

mod admin;
mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

// Re-export for the router
pub use admin::serve_admin;

const CONTENT_PREFIX: &str = "/api/content/";

/// API route handler
///
/// Dispatches to handler functions based on request path and method
pub async fn handle_api_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_owned();
    let method = req.method().clone();

    match (method, path.as_str()) {
        (Method::GET, "/api/list") => handlers::handle_list(state).await,
        (Method::GET, p) if p.starts_with(CONTENT_PREFIX) => {
            let slug = &p[CONTENT_PREFIX.len()..];
            handlers::handle_content(slug, state).await
        }
        (Method::POST, "/api/new") => handlers::handle_new(req, state).await,
        (Method::POST, "/api/edit") => handlers::handle_edit(req, state).await,
        (Method::POST, "/api/delete") => handlers::handle_delete(req, state).await,
        (method, _) => {
            logger::log_api_request(method.as_str(), &path, 404);
            Ok(response::unknown_endpoint())
        }
    }
}

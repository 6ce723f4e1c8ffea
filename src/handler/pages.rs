//! Dynamic page serving module
//!
//! Resolves a request path to a page slug, reads the content through the
//! page manager, and builds an `ETag`-validated HTML response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache};
use crate::logger;
use crate::pages::MAIN_SLUG;

/// Serve the page a path refers to, or 404
pub async fn serve_page(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let Some(slug) = page_slug(ctx.path) else {
        return http::build_404_response();
    };

    match state.pages.read_content(&slug).await {
        Ok(Some(html)) => {
            let etag = cache::generate_etag(html.as_bytes());
            if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
                return http::build_304_response(&etag);
            }

            if ctx.access_log {
                logger::log_page_served(&slug, html.len());
            }

            http::build_page_response(
                html,
                &state.config.http.default_content_type,
                &etag,
                ctx.is_head,
            )
        }
        Ok(None) => http::build_404_response(),
        Err(err) => {
            logger::log_error(&format!("failed to read page '{slug}': {err}"));
            http::build_500_response()
        }
    }
}

/// Map a request path to a page slug. `/` is the main page; a single path
/// segment is a slug lookup (lowercased, like every other inbound slug);
/// nested paths never match a page.
fn page_slug(path: &str) -> Option<String> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Some(MAIN_SLUG.to_string());
    }
    if trimmed.contains('/') {
        return None;
    }
    Some(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_main() {
        assert_eq!(page_slug("/").as_deref(), Some("main"));
    }

    #[test]
    fn single_segment_maps_to_slug() {
        assert_eq!(page_slug("/about").as_deref(), Some("about"));
        assert_eq!(page_slug("/about/").as_deref(), Some("about"));
    }

    #[test]
    fn slug_lookup_is_lowercased() {
        assert_eq!(page_slug("/About").as_deref(), Some("about"));
    }

    #[test]
    fn nested_paths_do_not_match() {
        assert_eq!(page_slug("/a/b"), None);
        assert_eq!(page_slug("/a/b/"), None);
    }
}

// API request/response types

use serde::{Deserialize, Serialize};

use crate::pages::PageRecord;

/// Mutation request body for /api/new, /api/edit and /api/delete.
///
/// Older clients were inconsistent about field names, so the canonical
/// `slug`/`html` pair accepts their aliases on input. The slug is still raw
/// here; handlers normalize it exactly once before touching the manager.
#[derive(Debug, Default, Deserialize)]
pub struct PageRequest {
    #[serde(default, alias = "route", alias = "routeName")]
    pub slug: String,
    #[serde(default, alias = "content", alias = "body")]
    pub html: String,
}

/// `GET /api/list` response: the registry, verbatim
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub webs: Vec<PageRecord>,
}

/// `GET /api/content/:slug` response
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub html: String,
}

/// Success acknowledgement for mutations
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn new() -> Self {
        Self { ok: true }
    }
}

/// Error body: `{ "error": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_fields_parse() {
        let req: PageRequest =
            serde_json::from_str(r#"{"slug":"about","html":"<h1>About</h1>"}"#).unwrap();
        assert_eq!(req.slug, "about");
        assert_eq!(req.html, "<h1>About</h1>");
    }

    #[test]
    fn legacy_aliases_parse() {
        let req: PageRequest =
            serde_json::from_str(r#"{"route":"about","content":"<p>hi</p>"}"#).unwrap();
        assert_eq!(req.slug, "about");
        assert_eq!(req.html, "<p>hi</p>");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let req: PageRequest = serde_json::from_str("{}").unwrap();
        assert!(req.slug.is_empty());
        assert!(req.html.is_empty());
    }
}

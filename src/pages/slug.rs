//! Slug rules
//!
//! Normalization and validation live here and nowhere else. The API boundary
//! normalizes raw client input once; the manager validates the normalized
//! form. Reservation is checked after lowercasing, so it is case-insensitive
//! by construction.

use super::error::PageError;

/// Slugs that collide with system routes and can never name a page.
pub const RESERVED_SLUGS: [&str; 5] = ["admin", "root", "system", "null", "undefined"];

/// Lowercase, collapse whitespace runs to `-`, strip everything outside
/// `[a-z0-9-]`. Applied once to raw client input.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Check a slug against the registry rules: non-empty, `[a-z0-9-]+`,
/// not reserved.
pub fn validate(slug: &str) -> Result<(), PageError> {
    if slug.is_empty() {
        return Err(PageError::Validation("slug required".to_string()));
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(PageError::Validation(
            "invalid slug, only a-z, 0-9 and - allowed".to_string(),
        ));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(PageError::Validation(format!("slug '{slug}' is reserved")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_slugs() {
        assert!(validate("about").is_ok());
        assert!(validate("my-page-2").is_ok());
        assert!(validate("main").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate("").is_err());
    }

    #[test]
    fn rejects_uppercase_and_symbols() {
        assert!(validate("About").is_err());
        assert!(validate("ADMIN").is_err());
        assert!(validate("a page").is_err());
        assert!(validate("page_1").is_err());
        assert!(validate("../etc").is_err());
    }

    #[test]
    fn rejects_reserved() {
        for slug in RESERVED_SLUGS {
            assert!(validate(slug).is_err(), "{slug} should be reserved");
        }
    }

    #[test]
    fn normalize_lowercases_and_strips() {
        assert_eq!(normalize("About"), "about");
        assert_eq!(normalize("My Page"), "my-page");
        assert_eq!(normalize("  spaced   out  "), "spaced-out");
        assert_eq!(normalize("héllo!"), "hllo");
        assert_eq!(normalize("ADMIN"), "admin");
    }

    #[test]
    fn normalized_reserved_slug_still_fails_validation() {
        // "ADMIN" normalizes to the reserved "admin"
        assert!(validate(&normalize("ADMIN")).is_err());
    }
}

// Page operation errors
// The API layer maps these to HTTP statuses (400/409/404, everything else 500)

use std::fmt;

/// Errors produced by page registry operations
#[derive(Debug)]
pub enum PageError {
    /// Bad or reserved slug, or a forbidden operation (e.g. deleting `main`)
    Validation(String),
    /// Slug already present in the registry
    Conflict(String),
    /// No record matches the slug
    NotFound(String),
    /// Filesystem failure
    Io(std::io::Error),
    /// Registry document (de)serialization failure
    Serialize(serde_json::Error),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) | Self::Conflict(msg) | Self::NotFound(msg) => {
                write!(f, "{msg}")
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialize(err) => write!(f, "registry serialization error: {err}"),
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

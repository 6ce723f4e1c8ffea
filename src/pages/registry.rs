//! Registry store
//!
//! Persists the page registry as a single JSON document. The document is
//! rewritten wholesale on every mutation; a save goes through a sibling temp
//! file plus rename so a reader never observes a half-written registry.
//! There is no concurrent-writer guarantee (single administrator assumed).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use super::error::PageError;

/// One page entry: slug, optional display title, and the backing HTML file
/// (path relative to the content directory, `<slug>.html`).
///
/// `route` is accepted as an input alias for `slug` so registries written by
/// earlier tooling still parse; output always uses the canonical names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    #[serde(alias = "route")]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub file: String,
}

/// Ordered page registry. Serialized as `{ "webs": [...] }`, the same shape
/// the list endpoint returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(rename = "webs", default)]
    pub pages: Vec<PageRecord>,
}

impl Registry {
    pub fn find(&self, slug: &str) -> Option<&PageRecord> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.find(slug).is_some()
    }
}

/// Handle to the registry document on disk.
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current registry. A missing backing file is an empty
    /// registry, never an error.
    pub async fn load(&self) -> Result<Registry, PageError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Registry::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Persist the full registry. Creates parent directories as needed and
    /// renames a temp file over the target.
    pub async fn save(&self, registry: &Registry) -> Result<(), PageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(registry)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str) -> PageRecord {
        PageRecord {
            slug: slug.to_string(),
            title: None,
            file: format!("{slug}.html"),
        }
    }

    #[tokio::test]
    async fn load_missing_file_is_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path().join("webs.json"));
        let registry = store.load().await.unwrap();
        assert!(registry.pages.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path().join("data").join("webs.json"));

        let mut registry = Registry::default();
        registry.pages.push(record("main"));
        registry.pages.push(record("about"));
        store.save(&registry).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.pages, registry.pages);
        assert!(loaded.contains("about"));
        assert!(!loaded.contains("missing"));
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("webs.json");
        let store = RegistryStore::new(&path);
        store.save(&Registry::default()).await.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn legacy_route_field_parses_as_slug() {
        let json = r#"{"webs":[{"route":"main","title":"Main Page","file":"main.html"}]}"#;
        let registry: Registry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.pages[0].slug, "main");
        assert_eq!(registry.pages[0].title.as_deref(), Some("Main Page"));
    }

    #[test]
    fn missing_title_is_skipped_on_output() {
        let registry = Registry {
            pages: vec![record("about")],
        };
        let json = serde_json::to_string(&registry).unwrap();
        assert!(json.contains(r#""webs""#));
        assert!(!json.contains("title"));
    }
}

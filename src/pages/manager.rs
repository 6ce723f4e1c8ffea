//! Page manager
//!
//! Owns the invariants around page records: slug validity and uniqueness,
//! the undeletable `main` page, and the pairing of each registry entry with
//! its backing HTML file. Every mutation runs validate → load registry →
//! mutate in memory → write file content → save registry, so a failure
//! during file I/O leaves the registry untouched. A registry-save failure
//! after a successful content write is not rolled back; the orphan file is
//! harmless and overwritten on retry.

use std::path::{Component, Path, PathBuf};
use tokio::fs;

use super::error::PageError;
use super::registry::{PageRecord, Registry, RegistryStore};
use super::slug;

/// The seed page; always present after initialization, never deletable.
pub const MAIN_SLUG: &str = "main";

const DEFAULT_MAIN_TITLE: &str = "Main Page";
const DEFAULT_MAIN_CONTENT: &str = "<!DOCTYPE html>\n\
<h1>Welcome to this CMS!</h1>\n\
<p>This is the <strong>main</strong> page.</p>\n\
<p>Edit it from <code>/admin</code>.</p>\n";

/// Registry + content-directory operations. Constructed with injected paths;
/// hold it in shared state, there is no ambient singleton.
pub struct PageManager {
    content_dir: PathBuf,
    store: RegistryStore,
}

impl PageManager {
    pub fn new(content_dir: impl Into<PathBuf>, registry_path: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            store: RegistryStore::new(registry_path),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn registry_path(&self) -> &Path {
        self.store.path()
    }

    /// Create the content directory and seed the `main` page if no record
    /// for it exists. Idempotent; called on startup and on SIGHUP.
    pub async fn ensure_initialized(&self) -> Result<(), PageError> {
        fs::create_dir_all(&self.content_dir).await?;

        let mut registry = self.store.load().await?;
        if registry.contains(MAIN_SLUG) {
            return Ok(());
        }

        let file = format!("{MAIN_SLUG}.html");
        fs::write(self.content_dir.join(&file), DEFAULT_MAIN_CONTENT).await?;
        registry.pages.push(PageRecord {
            slug: MAIN_SLUG.to_string(),
            title: Some(DEFAULT_MAIN_TITLE.to_string()),
            file,
        });
        self.store.save(&registry).await
    }

    /// All records, unfiltered, in registry order.
    pub async fn list(&self) -> Result<Vec<PageRecord>, PageError> {
        Ok(self.store.load().await?.pages)
    }

    /// Content of the page named `slug`. `None` when no record matches;
    /// an existing record whose file is missing reads as empty content.
    pub async fn read_content(&self, slug: &str) -> Result<Option<String>, PageError> {
        let registry = self.store.load().await?;
        let Some(record) = registry.find(slug) else {
            return Ok(None);
        };

        let path = self.resolve(&record.file)?;
        match fs::read_to_string(&path).await {
            Ok(html) => Ok(Some(html)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Some(String::new())),
            Err(err) => Err(err.into()),
        }
    }

    /// Create a new page: validate the slug, write `<slug>.html`, append the
    /// record.
    pub async fn create(&self, slug: &str, content: &str) -> Result<(), PageError> {
        slug::validate(slug)?;

        let mut registry = self.store.load().await?;
        if registry.contains(slug) {
            return Err(PageError::Conflict(format!("page '{slug}' already exists")));
        }

        let file = format!("{slug}.html");
        fs::create_dir_all(&self.content_dir).await?;
        fs::write(self.content_dir.join(&file), content).await?;

        registry.pages.push(PageRecord {
            slug: slug.to_string(),
            title: None,
            file,
        });
        self.store.save(&registry).await
    }

    /// Overwrite the content of an existing page. Slug and file path are
    /// immutable after creation, so the registry itself is not rewritten.
    pub async fn edit(&self, slug: &str, content: &str) -> Result<(), PageError> {
        let registry = self.store.load().await?;
        let Some(record) = registry.find(slug) else {
            return Err(PageError::NotFound(format!("page '{slug}' not found")));
        };

        let path = self.resolve(&record.file)?;
        fs::write(&path, content).await?;
        Ok(())
    }

    /// Remove a page and its backing file. `main` is never deletable.
    pub async fn delete(&self, slug: &str) -> Result<(), PageError> {
        if slug == MAIN_SLUG {
            return Err(PageError::Validation(
                "cannot delete the main page".to_string(),
            ));
        }

        let mut registry = self.store.load().await?;
        let Some(index) = registry.pages.iter().position(|p| p.slug == slug) else {
            return Err(PageError::NotFound(format!("page '{slug}' not found")));
        };

        let path = self.resolve(&registry.pages[index].file)?;
        match fs::remove_file(&path).await {
            Ok(()) => {}
            // already gone: the registry entry is still stale, drop it
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        registry.pages.remove(index);
        self.store.save(&registry).await
    }

    /// Resolve a record's file path under the content directory. The
    /// registry is an operator-editable file; a path that climbs out of the
    /// content directory is rejected rather than followed.
    fn resolve(&self, file: &str) -> Result<PathBuf, PageError> {
        let relative = Path::new(file);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(PageError::Validation(format!(
                "registry file path '{file}' escapes the content directory"
            )));
        }
        Ok(self.content_dir.join(relative))
    }
}

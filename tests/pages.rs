// Page manager end-to-end tests against a temp-directory-backed store

use tempfile::TempDir;

use yarcs::pages::{PageError, PageManager, MAIN_SLUG};

fn manager(dir: &TempDir) -> PageManager {
    PageManager::new(
        dir.path().join("web"),
        dir.path().join("data").join("webs.json"),
    )
}

async fn slugs(pages: &PageManager) -> Vec<String> {
    pages
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect()
}

#[tokio::test]
async fn fresh_store_seeds_exactly_one_main_page() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);

    pages.ensure_initialized().await.unwrap();

    let records = pages.list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].slug, MAIN_SLUG);
    assert_eq!(records[0].title.as_deref(), Some("Main Page"));
    assert_eq!(records[0].file, "main.html");

    let html = pages.read_content(MAIN_SLUG).await.unwrap().unwrap();
    assert!(html.contains("Welcome"));
}

#[tokio::test]
async fn ensure_initialized_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);

    pages.ensure_initialized().await.unwrap();
    pages.ensure_initialized().await.unwrap();
    pages.ensure_initialized().await.unwrap();

    assert_eq!(slugs(&pages).await, vec![MAIN_SLUG.to_string()]);
}

#[tokio::test]
async fn create_then_read_returns_exact_content() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();

    pages.create("about", "<h1>About</h1>").await.unwrap();

    let html = pages.read_content("about").await.unwrap();
    assert_eq!(html.as_deref(), Some("<h1>About</h1>"));
}

#[tokio::test]
async fn create_works_without_prior_initialization() {
    // Registry is lazily created on first use
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);

    pages.create("standalone", "<p>hi</p>").await.unwrap();
    assert_eq!(
        pages.read_content("standalone").await.unwrap().as_deref(),
        Some("<p>hi</p>")
    );
}

#[tokio::test]
async fn create_duplicate_fails_with_conflict_and_registry_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();

    pages.create("about", "<p>first</p>").await.unwrap();
    let before = slugs(&pages).await;

    let err = pages.create("about", "<p>second</p>").await.unwrap_err();
    assert!(matches!(err, PageError::Conflict(_)), "got {err:?}");

    assert_eq!(slugs(&pages).await, before);
    // the backing file was not clobbered either
    assert_eq!(
        pages.read_content("about").await.unwrap().as_deref(),
        Some("<p>first</p>")
    );
}

#[tokio::test]
async fn create_rejects_invalid_and_reserved_slugs() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);

    for bad in ["", "ADMIN", "has space", "under_score", "../escape"] {
        let err = pages.create(bad, "").await.unwrap_err();
        assert!(matches!(err, PageError::Validation(_)), "slug {bad:?}: {err:?}");
    }

    for reserved in ["admin", "root", "system", "null", "undefined"] {
        let err = pages.create(reserved, "").await.unwrap_err();
        assert!(
            matches!(err, PageError::Validation(_)),
            "slug {reserved:?}: {err:?}"
        );
    }

    assert!(slugs(&pages).await.is_empty());
}

#[tokio::test]
async fn delete_main_always_fails() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();

    let err = pages.delete(MAIN_SLUG).await.unwrap_err();
    assert!(matches!(err, PageError::Validation(_)), "got {err:?}");

    assert_eq!(slugs(&pages).await, vec![MAIN_SLUG.to_string()]);
    assert!(pages.read_content(MAIN_SLUG).await.unwrap().is_some());
}

#[tokio::test]
async fn edit_unknown_slug_fails_not_found_and_creates_no_record() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();

    let err = pages.edit("ghost", "<p>boo</p>").await.unwrap_err();
    assert!(matches!(err, PageError::NotFound(_)), "got {err:?}");

    assert_eq!(slugs(&pages).await, vec![MAIN_SLUG.to_string()]);
    assert!(pages.read_content("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn edit_overwrites_content_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();

    pages.create("news", "<p>old</p>").await.unwrap();
    let before = slugs(&pages).await;

    pages.edit("news", "<p>new</p>").await.unwrap();

    assert_eq!(
        pages.read_content("news").await.unwrap().as_deref(),
        Some("<p>new</p>")
    );
    // slug and file path unchanged, registry not rewritten
    assert_eq!(slugs(&pages).await, before);
}

#[tokio::test]
async fn create_then_delete_restores_slug_set() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();
    pages.create("keep", "<p>keep</p>").await.unwrap();

    let before = slugs(&pages).await;

    pages.create("temp", "<p>temp</p>").await.unwrap();
    pages.delete("temp").await.unwrap();

    assert_eq!(slugs(&pages).await, before);
    assert!(pages.read_content("temp").await.unwrap().is_none());
    assert!(!dir.path().join("web").join("temp.html").exists());
}

#[tokio::test]
async fn delete_unknown_slug_fails_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();

    let err = pages.delete("ghost").await.unwrap_err();
    assert!(matches!(err, PageError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_backing_file_reads_as_empty_content() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();
    pages.create("about", "<h1>About</h1>").await.unwrap();

    std::fs::remove_file(dir.path().join("web").join("about.html")).unwrap();

    // record exists, file gone: empty content, not an error
    assert_eq!(
        pages.read_content("about").await.unwrap().as_deref(),
        Some("")
    );
}

#[tokio::test]
async fn read_unknown_slug_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();

    assert!(pages.read_content("nowhere").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_with_already_missing_file_still_removes_record() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();
    pages.create("stale", "").await.unwrap();

    std::fs::remove_file(dir.path().join("web").join("stale.html")).unwrap();

    pages.delete("stale").await.unwrap();
    assert_eq!(slugs(&pages).await, vec![MAIN_SLUG.to_string()]);
}

#[tokio::test]
async fn registry_entry_escaping_content_dir_is_rejected_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let pages = manager(&dir);
    pages.ensure_initialized().await.unwrap();

    // simulate a hand-edited registry pointing outside the content dir
    let registry_path = dir.path().join("data").join("webs.json");
    let doc = r#"{"webs":[{"slug":"evil","file":"../data/webs.json"}]}"#;
    std::fs::write(&registry_path, doc).unwrap();

    let err = pages.read_content("evil").await.unwrap_err();
    assert!(matches!(err, PageError::Validation(_)), "got {err:?}");
}

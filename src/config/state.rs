// Application state module
// Configuration plus the shared page manager handle

use crate::pages::PageManager;

use super::types::Config;

/// Shared application state. One instance per process, passed by `Arc` to
/// every connection task. The page manager is stateless between calls (the
/// registry is re-read per operation), so no lock wraps it.
pub struct AppState {
    pub config: Config,
    pub pages: PageManager,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let pages = PageManager::new(&config.content.dir, &config.content.registry);
        Self {
            config: config.clone(),
            pages,
        }
    }
}

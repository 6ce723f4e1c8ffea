// Page registry core
// Registry store, page manager, slug rules, and the error taxonomy

pub mod error;
pub mod manager;
pub mod registry;
pub mod slug;

pub use error::PageError;
pub use manager::{PageManager, MAIN_SLUG};
pub use registry::{PageRecord, Registry, RegistryStore};

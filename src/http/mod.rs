//! HTTP protocol layer module
//!
//! Status-code response builders and cache-validation helpers, decoupled
//! from business logic. Shared by the page-serving path and the API layer.

pub mod cache;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_500_response, build_options_response, build_page_response,
};

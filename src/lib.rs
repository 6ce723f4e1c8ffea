//! YARCS - Yet Another Rust CMS Server
//!
//! A minimal content-management server: pages live as HTML files under a
//! content directory, a JSON registry maps slugs to files, and a small REST
//! API plus an embedded admin UI manage them. Built on Tokio and Hyper.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod pages;
pub mod server;

//! Wireframe Cache - a namespaced two-tier cache service
//!
//! Provides a read-through/write-through repository facade over a memory + disk
//! tiered store, exposed through a small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use api::AppState;
pub use config::Config;
pub use repository::WireframeRepository;

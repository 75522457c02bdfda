//! API Module
//!
//! HTTP handlers and routing for the wireframe cache REST API.
//!
//! # Endpoints
//! - `GET /wireframe/:key` - Retrieve a cached value by key
//! - `PUT /wireframe/:key` - Cache a value under a key
//! - `GET /stats` - Get tier statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

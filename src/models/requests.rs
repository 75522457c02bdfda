//! Request DTOs for the wireframe cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Request body for the PUT operation (PUT /wireframe/:key)
///
/// The value is any JSON shape the caller wants cached. A JSON `null` is
/// accepted at the transport layer and rejected by the repository, so the
/// caller gets the repository's error message rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The value to cache under the key
    pub value: Value,
}

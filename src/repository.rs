//! Wireframe Repository Module
//!
//! A repository to persist, on both the memory and disk tiers, data shared
//! between screens. Read-through/write-through facade over a [`CacheProvider`]
//! under the fixed `wireframe` namespace.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cache::CacheProvider;
use crate::error::{RepoError, Result};

/// Namespace under which every entry of this repository is stored.
pub const NAMESPACE: &str = "wireframe";

// == Wireframe Repository ==
/// Namespaced cache facade. Stateless and cheap to clone; all state lives in
/// the shared provider.
#[derive(Clone)]
pub struct WireframeRepository {
    provider: Arc<dyn CacheProvider>,
}

impl WireframeRepository {
    // == Constructor ==
    /// Creates a repository over the given provider.
    pub fn new(provider: Arc<dyn CacheProvider>) -> Self {
        Self { provider }
    }

    /// Composes the stored key from the fixed namespace and the caller's key.
    fn namespaced(key: &str) -> String {
        format!("{NAMESPACE}:{key}")
    }

    // == Get ==
    /// Returns the previously cached value associated with `key`.
    ///
    /// A provider miss or failure is reported as [`RepoError::Miss`] with the
    /// original error preserved as its source. No retry is performed.
    pub async fn get(&self, key: &str) -> Result<Value> {
        self.provider
            .read(&Self::namespaced(key))
            .await
            .map_err(|source| RepoError::Miss {
                key: key.to_string(),
                namespace: NAMESPACE,
                source,
            })
    }

    // == Put ==
    /// Caches `value` under `key`, replacing any existing entry.
    ///
    /// Null values are rejected before the provider is contacted, so a bad
    /// write can never clobber an existing entry.
    pub async fn put(&self, key: &str, value: Value) -> Result<()> {
        if value.is_null() {
            return Err(RepoError::NullValue {
                key: key.to_string(),
            });
        }

        self.provider
            .write_through(&Self::namespaced(key), value)
            .await?;
        debug!(key, "cached value in wireframe namespace");
        Ok(())
    }

    // == Typed Get ==
    /// Reads and deserializes the cached JSON into `T`.
    ///
    /// Callers are responsible for using a consistent type per key; no schema
    /// is enforced.
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.get(key).await?;
        serde_json::from_value(value).map_err(|err| RepoError::Provider(err.into()))
    }

    // == Typed Put ==
    /// Serializes `value` to JSON and caches it under `key`.
    pub async fn put_as<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|err| RepoError::Provider(err.into()))?;
        self.put(key, value).await
    }
}

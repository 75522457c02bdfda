//! Cache Module
//!
//! Two-tier (memory + disk) storage behind the [`CacheProvider`] trait.

mod disk;
mod memory;
mod stats;
mod tiered;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use disk::DiskTier;
pub use memory::MemoryTier;
pub use stats::CacheStats;
pub use tiered::TieredCache;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

// == Provider Error Enum ==
/// Errors surfaced by a cache provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Key is present in neither tier
    #[error("key not found: {0}")]
    NotFound(String),

    /// Disk tier I/O failure
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored or supplied data could not be (de)serialized
    #[error("invalid cached data: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Cache Provider Trait ==
/// Minimal surface the repository needs from its backing store.
///
/// Keys are opaque strings already carrying the repository's namespace prefix.
/// `write_through` must leave every tier holding the new value before it
/// resolves; `read` resolves with `NotFound` when no tier holds the key.
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Returns the value stored under `key`.
    async fn read(&self, key: &str) -> Result<Value, ProviderError>;

    /// Stores `value` under `key` across all tiers, replacing any existing entry.
    async fn write_through(&self, key: &str, value: Value) -> Result<(), ProviderError>;
}

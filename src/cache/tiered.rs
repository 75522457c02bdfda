//! Tiered Cache Module
//!
//! Combines the memory and disk tiers into one [`CacheProvider`]: reads check
//! memory first and promote disk hits; writes go through to both tiers.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use super::{CacheProvider, CacheStats, DiskTier, MemoryTier, ProviderError};

// == Tiered Cache ==
/// Two-tier cache store: bounded memory tier in front of a durable disk tier.
#[derive(Debug)]
pub struct TieredCache {
    /// Fast tier, LRU-bounded
    memory: RwLock<MemoryTier>,
    /// Durable tier, authoritative for all entries
    disk: DiskTier,
    /// Performance statistics
    stats: RwLock<CacheStats>,
}

impl TieredCache {
    // == Constructor ==
    /// Opens a tiered cache with its disk tier rooted at `dir` and a memory
    /// tier holding at most `max_memory_entries` entries.
    pub async fn open(
        dir: impl AsRef<Path>,
        max_memory_entries: usize,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            memory: RwLock::new(MemoryTier::new(max_memory_entries)),
            disk: DiskTier::open(dir).await?,
            stats: RwLock::new(CacheStats::new()),
        })
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub async fn stats(&self) -> CacheStats {
        let mut stats = self.stats.read().await.clone();
        stats.memory_entries = self.memory.read().await.len();
        stats
    }
}

#[async_trait]
impl CacheProvider for TieredCache {
    async fn read(&self, key: &str) -> Result<Value, ProviderError> {
        // Write lock: a hit refreshes LRU recency
        if let Some(value) = self.memory.write().await.get(key) {
            self.stats.write().await.record_memory_hit();
            return Ok(value);
        }

        match self.disk.read(key).await {
            Ok(value) => {
                debug!(key, "promoting disk entry into memory tier");
                if let Some(evicted) = self.memory.write().await.insert(key, value.clone()) {
                    debug!(%evicted, "evicted least recently used entry");
                    self.stats.write().await.record_eviction();
                }
                self.stats.write().await.record_disk_hit();
                Ok(value)
            }
            Err(ProviderError::NotFound(_)) => {
                self.stats.write().await.record_miss();
                Err(ProviderError::NotFound(key.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    async fn write_through(&self, key: &str, value: Value) -> Result<(), ProviderError> {
        // Disk first: a failed write must not leave a memory-only entry
        self.disk.write(key, value.clone()).await?;

        if let Some(evicted) = self.memory.write().await.insert(key, value) {
            debug!(%evicted, "evicted least recently used entry");
            self.stats.write().await.record_eviction();
        }
        self.stats.write().await.record_write();
        Ok(())
    }
}

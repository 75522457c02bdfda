//! Cache Statistics Module
//!
//! Tracks tier performance metrics: hits per tier, misses, evictions and writes.

use serde::Serialize;

// == Cache Stats ==
/// Tracks tiered cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of reads served from the memory tier
    pub memory_hits: u64,
    /// Number of reads served from the disk tier (and promoted to memory)
    pub disk_hits: u64,
    /// Number of reads that found no entry in either tier
    pub misses: u64,
    /// Number of memory tier entries dropped by the LRU policy
    pub evictions: u64,
    /// Number of write-through operations completed
    pub writes: u64,
    /// Current number of entries in the memory tier
    pub memory_entries: usize,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the read hit rate across both tiers.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.memory_hits + self.disk_hits;
        let total = hits + self.misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Increments the memory tier hit counter.
    pub fn record_memory_hit(&mut self) {
        self.memory_hits += 1;
    }

    /// Increments the disk tier hit counter.
    pub fn record_disk_hit(&mut self) {
        self.disk_hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Increments the write counter.
    pub fn record_write(&mut self) {
        self.writes += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.memory_hits, 0);
        assert_eq!(stats.disk_hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_counts_both_tiers() {
        let mut stats = CacheStats::new();
        stats.record_memory_hit();
        stats.record_disk_hit();
        stats.record_memory_hit();
        stats.record_miss();

        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_write();
        stats.record_write();

        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.writes, 2);
    }
}

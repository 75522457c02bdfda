//! Response DTOs for the wireframe cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for the GET operation (GET /wireframe/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The cached value
    pub value: Value,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the PUT operation (PUT /wireframe/:key)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Success message
    pub message: String,
    /// The key that was cached
    pub key: String,
}

impl PutResponse {
    /// Creates a new PutResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cached successfully", key),
            key,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reads served from the memory tier
    pub memory_hits: u64,
    /// Reads served from the disk tier
    pub disk_hits: u64,
    /// Reads that found no entry
    pub misses: u64,
    /// Memory tier LRU evictions
    pub evictions: u64,
    /// Completed write-through operations
    pub writes: u64,
    /// Current memory tier entry count
    pub memory_entries: usize,
    /// Hit rate across both tiers
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            memory_hits: stats.memory_hits,
            disk_hits: stats.disk_hits,
            misses: stats.misses,
            evictions: stats.evictions,
            writes: stats.writes,
            memory_entries: stats.memory_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_response_serializes_value_verbatim() {
        let resp = GetResponse::new("user:42", json!({"name": "Ada"}));
        let serialized = serde_json::to_value(&resp).unwrap();
        assert_eq!(serialized["value"], json!({"name": "Ada"}));
        assert_eq!(serialized["key"], "user:42");
    }

    #[test]
    fn test_stats_response_from_stats() {
        let mut stats = CacheStats::new();
        stats.record_memory_hit();
        stats.record_miss();

        let resp = StatsResponse::from(stats);
        assert_eq!(resp.memory_hits, 1);
        assert_eq!(resp.misses, 1);
        assert_eq!(resp.hit_rate, 0.5);
    }
}

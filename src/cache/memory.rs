//! Memory Tier Module
//!
//! Bounded in-memory map with least-recently-used eviction. This is the fast
//! path of the tiered store; the disk tier stays authoritative, so evicting
//! here never loses data.

use std::collections::{HashMap, VecDeque};

use serde_json::Value;

// == Memory Tier ==
/// In-memory key/value tier with LRU eviction.
///
/// Access order is tracked in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct MemoryTier {
    /// Key-value storage
    entries: HashMap<String, Value>,
    /// Order of keys by access time
    order: VecDeque<String>,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl MemoryTier {
    // == Constructor ==
    /// Creates an empty tier holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_entries,
        }
    }

    // == Get ==
    /// Returns the cached value for `key` and refreshes its recency.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let value = self.entries.get(key).cloned()?;
        self.touch(key);
        Some(value)
    }

    // == Insert ==
    /// Inserts or overwrites a value.
    ///
    /// If the key is new and the tier is at capacity, the least recently used
    /// entry is dropped first. Returns the evicted key, if any.
    pub fn insert(&mut self, key: &str, value: Value) -> Option<String> {
        let mut evicted = None;

        if !self.entries.contains_key(key) && self.entries.len() >= self.max_entries {
            if let Some(oldest) = self.order.pop_back() {
                self.entries.remove(&oldest);
                evicted = Some(oldest);
            }
        }

        self.entries.insert(key.to_string(), value);
        self.touch(key);
        evicted
    }

    // == Touch ==
    /// Marks a key as most recently used.
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.to_string());
    }

    // == Length ==
    /// Returns the current number of entries in the tier.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the tier holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tier_new() {
        let tier = MemoryTier::new(100);
        assert_eq!(tier.len(), 0);
        assert!(tier.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut tier = MemoryTier::new(100);

        tier.insert("key1", json!("value1"));
        let value = tier.get("key1").unwrap();

        assert_eq!(value, json!("value1"));
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let mut tier = MemoryTier::new(100);
        assert!(tier.get("nonexistent").is_none());
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut tier = MemoryTier::new(100);

        tier.insert("key1", json!("value1"));
        tier.insert("key1", json!("value2"));

        assert_eq!(tier.get("key1").unwrap(), json!("value2"));
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn test_lru_eviction() {
        let mut tier = MemoryTier::new(3);

        tier.insert("key1", json!(1));
        tier.insert("key2", json!(2));
        tier.insert("key3", json!(3));

        // Tier is full, adding key4 should evict key1 (oldest)
        let evicted = tier.insert("key4", json!(4));

        assert_eq!(evicted.as_deref(), Some("key1"));
        assert_eq!(tier.len(), 3);
        assert!(tier.get("key1").is_none());
        assert!(tier.get("key2").is_some());
        assert!(tier.get("key3").is_some());
        assert!(tier.get("key4").is_some());
    }

    #[test]
    fn test_lru_touch_on_get() {
        let mut tier = MemoryTier::new(3);

        tier.insert("key1", json!(1));
        tier.insert("key2", json!(2));
        tier.insert("key3", json!(3));

        // Access key1 to make it most recently used
        tier.get("key1").unwrap();

        // Adding key4 should evict key2 (now oldest)
        let evicted = tier.insert("key4", json!(4));

        assert_eq!(evicted.as_deref(), Some("key2"));
        assert!(tier.get("key1").is_some());
        assert!(tier.get("key2").is_none());
    }

    #[test]
    fn test_overwrite_does_not_evict() {
        let mut tier = MemoryTier::new(2);

        tier.insert("key1", json!(1));
        tier.insert("key2", json!(2));

        // Overwriting an existing key at capacity must not evict anything
        let evicted = tier.insert("key1", json!(10));

        assert!(evicted.is_none());
        assert_eq!(tier.len(), 2);
    }
}

//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the tiered store's overwrite and miss behavior
//! against a plain map model.

use std::collections::HashMap;

use proptest::prelude::*;
use serde_json::{json, Value};

use crate::cache::{CacheProvider, ProviderError, TieredCache};

// == Strategies ==
/// Generates cache keys, deliberately drawn from a small alphabet so that
/// overwrites are common.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,4}".prop_map(|s| s)
}

/// Generates JSON values of a few representative shapes.
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,32}".prop_map(|s| json!(s)),
        (any::<bool>(), any::<u32>()).prop_map(|(b, n)| json!({"flag": b, "count": n})),
    ]
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build test runtime")
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // For any sequence of writes, reading a written key afterwards returns
    // the last value written for it, regardless of memory tier evictions.
    #[test]
    fn prop_last_write_wins(writes in prop::collection::vec((key_strategy(), value_strategy()), 1..24)) {
        block_on(async {
            let dir = tempfile::tempdir().unwrap();
            // Tiny memory tier so promotion and eviction paths are exercised
            let cache = TieredCache::open(dir.path(), 2).await.unwrap();
            let mut model: HashMap<String, Value> = HashMap::new();

            for (key, value) in writes {
                cache.write_through(&key, value.clone()).await.unwrap();
                model.insert(key, value);
            }

            for (key, expected) in &model {
                let got = cache.read(key).await.unwrap();
                prop_assert_eq!(&got, expected);
            }
            Ok(())
        })?;
    }

    // Keys that were never written always read as NotFound.
    #[test]
    fn prop_unwritten_keys_miss(writes in prop::collection::vec((key_strategy(), value_strategy()), 0..8)) {
        block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let cache = TieredCache::open(dir.path(), 16).await.unwrap();

            for (key, value) in &writes {
                cache.write_through(key, value.clone()).await.unwrap();
            }

            // Outside the [a-d]{1,4} key alphabet, so never written
            let result = cache.read("never-written").await;
            prop_assert!(matches!(result, Err(ProviderError::NotFound(_))));
            Ok(())
        })?;
    }
}

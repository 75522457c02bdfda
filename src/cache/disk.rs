//! Disk Tier Module
//!
//! Durable tier persisting the full key/value map as a single JSON document.
//! Writes go through a temp file and rename, so a crash mid-write never
//! truncates previously cached data.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;

use super::ProviderError;

const STORE_FILE: &str = "wireframe.json";

// == Disk Tier ==
/// File-backed key/value tier.
#[derive(Debug)]
pub struct DiskTier {
    /// Path of the JSON document holding all entries
    path: PathBuf,
    /// Serializes load-modify-write cycles between concurrent writers
    write_lock: Mutex<()>,
}

impl DiskTier {
    // == Constructor ==
    /// Opens the tier rooted at `dir`, creating the directory if needed.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, ProviderError> {
        fs::create_dir_all(dir.as_ref()).await?;
        Ok(Self {
            path: dir.as_ref().join(STORE_FILE),
            write_lock: Mutex::new(()),
        })
    }

    /// Loads the stored map; a missing file is an empty map.
    async fn load(&self) -> Result<HashMap<String, Value>, ProviderError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    // == Read ==
    /// Returns the stored value for `key`.
    pub async fn read(&self, key: &str) -> Result<Value, ProviderError> {
        let entries = self.load().await?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(key.to_string()))
    }

    // == Write ==
    /// Stores `value` under `key`, replacing any existing entry.
    pub async fn write(&self, key: &str, value: Value) -> Result<(), ProviderError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value);

        let bytes = serde_json::to_vec_pretty(&entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

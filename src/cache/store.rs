use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// File-based JSON store for caches and snapshots.
///
/// Every key maps to one pretty-printed UTF-8 JSON file. Files are read and
/// written whole: callers load a map, mutate it in memory and persist it
/// back, so a crash mid-run can only lose the current run's updates.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();

        fs::create_dir_all(&dir).context("Failed to create store directory")?;

        Ok(Self { dir })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Persist data under a key, replacing any previous content.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.path_for(key);

        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;

        fs::write(&file_path, json).context("Failed to write store file")?;

        info!("Saved data to store: {}", file_path.display());
        Ok(())
    }

    /// Load the data stored under a key, or `None` if the file is absent.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.path_for(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).context("Failed to read store file")?;

        let data = serde_json::from_str(&json).context("Failed to deserialize store data")?;

        Ok(Some(data))
    }

    /// Load with an empty baseline: a missing or unreadable file is not an
    /// error for batch aggregation, just a first run.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.load(key) {
            Ok(Some(data)) => data,
            Ok(None) => T::default(),
            Err(e) => {
                warn!("Ignoring unreadable store file {}: {:#}", key, e);
                T::default()
            }
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}

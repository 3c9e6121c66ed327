//! Recent-values persistence for quick re-use of addresses and ports.
//!
//! Stores the last five IPs and ports in JSON format at
//! `~/.ftpcalc/recent.json`. Lists are deduplicated, newest first.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::ports::RecentRepository;

/// Maximum entries kept per recency list.
pub const RECENT_CAP: usize = 5;

/// Recency lists stored in JSON format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentValues {
    /// Recently used IP addresses, newest first.
    #[serde(default)]
    pub ips: Vec<String>,

    /// Recently used ports, newest first. Kept as entered (text), since
    /// the lists exist to refill input fields.
    #[serde(default)]
    pub ports: Vec<String>,
}

impl RecentValues {
    /// Record an IP: dedupe, prepend, cap at [`RECENT_CAP`].
    pub fn push_ip(&mut self, ip: &str) {
        push_recent(&mut self.ips, ip);
    }

    /// Record a port: dedupe, prepend, cap at [`RECENT_CAP`].
    pub fn push_port(&mut self, port: &str) {
        push_recent(&mut self.ports, port);
    }
}

fn push_recent(list: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    list.retain(|v| v != value);
    list.insert(0, value.to_string());
    list.truncate(RECENT_CAP);
}

/// File-backed store for the recency lists.
///
/// Handles reading and writing `~/.ftpcalc/recent.json`.
pub struct RecentStore {
    /// Path to the store file.
    store_path: PathBuf,
}

impl RecentStore {
    /// Create a store with the default path.
    ///
    /// Default path: `~/.ftpcalc/recent.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Store("Could not determine home directory".to_string()))?;

        let store_dir = home.join(".ftpcalc");
        let store_path = store_dir.join("recent.json");

        Ok(Self { store_path })
    }

    /// Create a store with a custom path (for testing).
    pub fn with_path(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    /// Load the recency lists from disk.
    ///
    /// Returns empty lists if the file doesn't exist.
    pub async fn load(&self) -> Result<RecentValues> {
        if !self.store_path.exists() {
            return Ok(RecentValues::default());
        }

        let content = fs::read_to_string(&self.store_path)
            .await
            .map_err(|e| Error::Store(format!("Failed to read store: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Store(format!("Failed to parse store: {}", e)))
    }

    /// Save the recency lists to disk.
    ///
    /// Creates the store directory if it doesn't exist.
    pub async fn save(&self, values: &RecentValues) -> Result<()> {
        if let Some(dir) = self.store_path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .await
                    .map_err(|e| Error::Store(format!("Failed to create store directory: {}", e)))?;
            }
        }

        let content = serde_json::to_string_pretty(values)
            .map_err(|e| Error::Store(format!("Failed to serialize store: {}", e)))?;

        // Write atomically by writing to temp file then renaming
        let temp_path = self.store_path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Store(format!("Failed to create temp store file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Store(format!("Failed to write store: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Store(format!("Failed to sync store: {}", e)))?;

        fs::rename(&temp_path, &self.store_path)
            .await
            .map_err(|e| Error::Store(format!("Failed to rename store file: {}", e)))?;

        Ok(())
    }
}

impl RecentRepository for RecentStore {
    async fn load(&self) -> Result<RecentValues> {
        RecentStore::load(self).await
    }

    async fn add_recent_ip(&self, ip: &str) -> Result<()> {
        let mut values = RecentStore::load(self).await?;
        values.push_ip(ip);
        self.save(&values).await
    }

    async fn add_recent_port(&self, port: &str) -> Result<()> {
        let mut values = RecentStore::load(self).await?;
        values.push_port(port);
        self.save(&values).await
    }

    async fn clear(&self) -> Result<()> {
        self.save(&RecentValues::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store() -> (RecentStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recent.json");
        (RecentStore::with_path(path), dir)
    }

    #[test]
    fn test_push_dedupe_prepend_cap() {
        let mut values = RecentValues::default();
        for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
            values.push_ip(ip);
        }
        assert_eq!(values.ips, ["10.0.0.3", "10.0.0.2", "10.0.0.1"]);

        // Re-adding moves to the front without duplicating
        values.push_ip("10.0.0.1");
        assert_eq!(values.ips, ["10.0.0.1", "10.0.0.3", "10.0.0.2"]);

        for ip in ["10.0.0.4", "10.0.0.5", "10.0.0.6"] {
            values.push_ip(ip);
        }
        assert_eq!(values.ips.len(), RECENT_CAP);
        assert_eq!(values.ips[0], "10.0.0.6");

        // Blank values are ignored
        values.push_ip("   ");
        assert_eq!(values.ips.len(), RECENT_CAP);
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (store, _dir) = test_store();
        let values = store.load().await.unwrap();
        assert!(values.ips.is_empty());
        assert!(values.ports.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _dir) = test_store();

        let mut values = RecentValues::default();
        values.push_ip("192.168.1.50");
        values.push_port("52163");
        store.save(&values).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, values);
    }

    #[tokio::test]
    async fn test_repository_roundtrip() {
        let (store, _dir) = test_store();

        RecentRepository::add_recent_ip(&store, "10.0.0.1").await.unwrap();
        RecentRepository::add_recent_port(&store, "2121").await.unwrap();

        let values = RecentRepository::load(&store).await.unwrap();
        assert_eq!(values.ips, ["10.0.0.1"]);
        assert_eq!(values.ports, ["2121"]);

        RecentRepository::clear(&store).await.unwrap();
        let values = RecentRepository::load(&store).await.unwrap();
        assert!(values.ips.is_empty());
        assert!(values.ports.is_empty());
    }
}

//! Keyed blob storage
//!
//! Flat key/value persistence over JSON files. Keys follow the
//! `namespace:name` convention (`dsvb:artistbank`); each `:` maps to a
//! subdirectory under the store root, so `dsvb:artistbank` lands at
//! `<root>/dsvb/artistbank.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use sf_core::{SfError, SfResult};

/// File-backed key/value store for JSON blobs
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Open a store at the given root, creating it if needed
    pub fn open<P: AsRef<Path>>(root: P) -> SfResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the store at the per-user default location
    pub fn open_default() -> SfResult<Self> {
        Self::open(Self::default_root())
    }

    /// Per-platform default store root
    pub fn default_root() -> PathBuf {
        if cfg!(target_os = "macos") {
            dirs::home_dir()
                .map(|h| h.join("Library/Application Support/ShotForge Studio"))
                .unwrap_or_else(|| PathBuf::from("."))
        } else if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .map(|d| d.join("ShotForge Studio"))
                .unwrap_or_else(|| PathBuf::from("."))
        } else {
            // Linux/other
            dirs::config_dir()
                .map(|d| d.join("shotforge"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }

    /// The store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reject keys outside `[a-z0-9:_-]` (no path escapes, no case games)
    fn validate_key(key: &str) -> SfResult<()> {
        let charset_ok = key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ':' | '_' | '-'));
        let segments_ok = !key.is_empty() && key.split(':').all(|part| !part.is_empty());
        if charset_ok && segments_ok {
            Ok(())
        } else {
            Err(SfError::InvalidParam(format!("invalid store key: {key:?}")))
        }
    }

    /// Path for a key: `ns:name` → `<root>/ns/name.json`
    fn key_path(&self, key: &str) -> SfResult<PathBuf> {
        Self::validate_key(key)?;
        let mut path = self.root.clone();
        for part in key.split(':') {
            path.push(part);
        }
        path.set_extension("json");
        Ok(path)
    }

    /// Read the raw blob for a key; `None` when the key was never written
    pub fn read(&self, key: &str) -> SfResult<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the raw blob for a key, creating parent directories
    pub fn write(&self, key: &str, contents: &str) -> SfResult<()> {
        let path = self.key_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        log::debug!("wrote {} bytes to {key}", contents.len());
        Ok(())
    }

    /// Remove a key; removing an absent key is not an error
    pub fn remove(&self, key: &str) -> SfResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// True when the key holds a blob
    pub fn exists(&self, key: &str) -> bool {
        self.key_path(key).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Read and deserialize a JSON blob
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> SfResult<Option<T>> {
        match self.read(key)? {
            Some(content) => {
                let value = serde_json::from_str(&content)
                    .map_err(|e| SfError::Serialization(format!("{key}: {e}")))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize and write a JSON blob
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) -> SfResult<()> {
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| SfError::Serialization(format!("{key}: {e}")))?;
        self.write(key, &content)
    }
}

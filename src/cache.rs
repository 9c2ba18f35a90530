// src/cache.rs
//! Persistent per-file cache keyed by path + modification time.
//!
//! One JSON file per key under a process-independent directory, so repeat
//! runs over an unchanged tree can skip redundant work. Entries are never
//! invalidated: a changed mtime simply derives a different key and the old
//! entry goes stale until the directory is cleared externally. Corrupted
//! entries read as misses, never as errors.

use crate::error::{DeclDupError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// A file-backed cache rooted at one directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Opens the default cache: `$XDG_CACHE_HOME/decldup`, falling back to
    /// the platform temp directory.
    #[must_use]
    pub fn default_location() -> Self {
        let base = env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);
        Self::at(base.join("decldup"))
    }

    /// Opens a cache rooted at an explicit directory.
    #[must_use]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Derives a stable key from a file path and its mtime in milliseconds.
    #[must_use]
    pub fn key(path: &Path, mtime_ms: u128) -> String {
        let mut hasher = Sha256::new();
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update(mtime_ms.to_string().as_bytes());
        let digest = hasher.finalize();

        let mut hex = String::with_capacity(64);
        for byte in digest {
            hex.push_str(&format!("{byte:02x}"));
        }
        hex
    }

    /// Reads a cached value. Absent, unreadable, or undeserializable
    /// entries are all misses.
    #[must_use]
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = fs::read_to_string(self.entry_path(key)).ok()?;
        serde_json::from_str(&text).ok()
    }

    /// Persists a value under a key, overwriting any prior entry. Writes
    /// are single-key and last-write-wins; no locking.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| DeclDupError::io(e, self.root.clone()))?;
        let path = self.entry_path(key);
        let text = serde_json::to_string(value)?;
        fs::write(&path, text).map_err(|e| DeclDupError::io(e, path))?;
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

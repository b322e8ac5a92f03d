// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Two-tier key-value store backing the session and the cache.
//!
//! Values live in a concurrent in-memory map and, when a storage directory
//! is configured, in one file per key underneath it. Reads hit memory first
//! and re-warm it from disk on a miss; writes go through both tiers.
//! Keys are fixed constants (see [`crate::store::keys`]), never user input.

use dashmap::DashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Cloneable key-value store handle.
#[derive(Clone)]
pub struct KvStore {
    memory: Arc<DashMap<String, String>>,
    dir: Option<PathBuf>,
}

impl KvStore {
    /// Create a purely in-memory store (testing, or no persistence configured).
    pub fn in_memory() -> Self {
        Self {
            memory: Arc::new(DashMap::new()),
            dir: None,
        }
    }

    /// Open a file-backed store rooted at `dir`, creating it if needed.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", dir.display(), e)))?;

        tracing::debug!(dir = %dir.display(), "Opened key-value store");

        Ok(Self {
            memory: Arc::new(DashMap::new()),
            dir: Some(dir),
        })
    }

    fn path_for(&self, key: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|d| d.join(format!("{key}.json")))
    }

    /// Read a value, checking memory first and falling back to disk.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if let Some(hit) = self.memory.get(key) {
            return Ok(Some(hit.clone()));
        }

        let Some(path) = self.path_for(key) else {
            return Ok(None);
        };

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                self.memory.insert(key.to_string(), value.clone());
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    /// Write a value through both tiers.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.memory.insert(key.to_string(), value.to_string());

        if let Some(path) = self.path_for(key) {
            tokio::fs::write(&path, value)
                .await
                .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;
        }

        Ok(())
    }

    /// Remove a value from both tiers. Removing an absent key is a no-op.
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.memory.remove(key);

        if let Some(path) = self.path_for(key) {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::Io(format!("{}: {}", path.display(), e))),
            }
        }

        Ok(())
    }
}

/// Errors from the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(String),
}

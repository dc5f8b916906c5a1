//! Storage abstractions for the record store
//!
//! A backend is a flat string-to-string slot map, the same contract a browser
//! key-value store offers. The record store keeps its whole JSON document
//! under one key.

pub mod file_backend;
pub mod memory_backend;

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use configs::{BackendKind, StorageConfig};

pub use file_backend::FileBackend;
pub use memory_backend::MemoryBackend;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Trait abstraction for the durable slot behind the record store.
/// Implementations can be in-memory, file-backed, or remote KV.
pub trait KvBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove a key; returns whether it existed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

/// Build the backend named by the storage config.
pub fn open_backend(cfg: &StorageConfig) -> Result<Arc<dyn KvBackend>, StorageError> {
    let backend: Arc<dyn KvBackend> = match cfg.backend {
        BackendKind::Memory => Arc::new(MemoryBackend::new()),
        BackendKind::File => Arc::new(FileBackend::new(&cfg.data_dir)?),
    };
    info!(backend = ?cfg.backend, data_dir = %cfg.data_dir, "storage backend opened");
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_backend_follows_config() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("portal_open_{}", uuid::Uuid::new_v4()));
        let cfg = StorageConfig {
            backend: BackendKind::File,
            data_dir: dir.to_string_lossy().to_string(),
            key: "k".into(),
        };
        let backend = open_backend(&cfg)?;
        backend.set("k", "{}")?;
        assert!(dir.join("k.json").is_file());

        let mem = open_backend(&StorageConfig { backend: BackendKind::Memory, ..cfg })?;
        assert_eq!(mem.get("k")?, None);

        let _ = std::fs::remove_dir_all(&dir);
        Ok(())
    }
}

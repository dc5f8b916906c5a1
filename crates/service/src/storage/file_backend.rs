use std::{fs, io::ErrorKind, path::PathBuf};

use tracing::debug;

use super::{KvBackend, StorageError};

/// File-backed slot map: key `k` lives in `<dir>/k.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Initialize the backend at a directory, creating it if missing.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io { key: dir.display().to_string(), source })?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, key: &str) -> PathBuf { self.dir.join(format!("{key}.json")) }

    fn io_err(key: &str) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
        move |source| StorageError::Io { key: key.to_string(), source }
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_err(key)(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::write(&path, value).map_err(Self::io_err(key))?;
        debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Self::io_err(key)(e)),
        }
    }
}

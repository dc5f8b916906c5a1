use dashmap::DashMap;

use super::{KvBackend, StorageError};

/// Process-local slot map, used for tests and throwaway demo sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: DashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.slots.len() }

    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.slots.remove(key).is_some())
    }
}

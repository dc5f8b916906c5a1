#![cfg(test)]
use std::sync::Arc;

use models::user::{KioskProfile, NewUser, RoleProfile, WorkerProfile};

use crate::storage::{KvBackend, MemoryBackend, StorageError};
use crate::store::RecordStore;

/// Fresh store over its own in-memory backend.
pub fn memory_store() -> RecordStore {
    RecordStore::new(Arc::new(MemoryBackend::new()))
}

/// Backend whose every call fails, for the error-absorbing paths.
pub struct FailingBackend;

impl KvBackend for FailingBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("get refused".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("set refused".into()))
    }

    fn remove(&self, _key: &str) -> Result<bool, StorageError> {
        Err(StorageError::Unavailable("remove refused".into()))
    }
}

pub fn new_worker(email: &str, kiosk_id: Option<&str>) -> NewUser {
    let profile = match kiosk_id {
        Some(k) => WorkerProfile::registered_by_kiosk(k),
        None => WorkerProfile::default(),
    };
    NewUser {
        name: "Worker".into(),
        email: email.to_string(),
        phone: "9000000000".into(),
        password: "p".into(),
        profile: RoleProfile::Worker(WorkerProfile { aadhaar_number: "1234 5678 9012".into(), ..profile }),
    }
}

pub fn new_kiosk(email: &str) -> NewUser {
    NewUser {
        name: "Kiosk".into(),
        email: email.to_string(),
        phone: "1".into(),
        password: "k".into(),
        profile: RoleProfile::Kiosk(KioskProfile { location: "Pune".into(), address: "MG Road".into() }),
    }
}

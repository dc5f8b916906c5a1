//! Whole-document record store.
//!
//! Every operation loads the full document from the backend, scans the
//! relevant collection linearly, mutates it in place and writes the whole
//! document back. Errors never reach the caller: reads fall back to the seed
//! document, writes report `false`/`None`, and the cause is logged.
//!
//! There is no locking around the load/modify/save cycle. Two stores sharing
//! one backend can overwrite each other's writes.

mod applications;
mod documents;
mod jobs;
mod layout;
mod profile_requests;
pub mod seed;
mod users;

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use models::{
    application::Application, document::Document, job::Job, profile_request::ProfileUpdateRequest,
    record::Record, user::User,
};

use crate::errors::ServiceError;
use crate::storage::KvBackend;

pub use configs::DEFAULT_STORAGE_KEY;

/// The persisted blob: five collections under one key.
///
/// Records keep stored keys their type does not model; see `layout` for the
/// JSON shape and for what happens to records that do not decode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreDocument {
    pub users: Vec<Record<User>>,
    pub jobs: Vec<Record<Job>>,
    pub applications: Vec<Record<Application>>,
    pub documents: Vec<Record<Document>>,
    pub profile_update_requests: Vec<Record<ProfileUpdateRequest>>,
    pub(crate) unreadable: layout::Unreadable,
}

/// Record store over one key of a pluggable backend.
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn KvBackend>,
    key: String,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self { Self::with_key(backend, DEFAULT_STORAGE_KEY) }

    pub fn with_key(backend: Arc<dyn KvBackend>, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn key(&self) -> &str { &self.key }

    /// Read the whole document. A missing slot, a failed read or a blob that
    /// is not a JSON object yields the seed document; nothing is written back.
    pub fn load(&self) -> StoreDocument {
        match self.try_load() {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                debug!(key = %self.key, "no stored document; using seed data");
                seed::default_document()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored document unreadable; using seed data");
                seed::default_document()
            }
        }
    }

    fn try_load(&self) -> Result<Option<StoreDocument>, ServiceError> {
        let Some(raw) = self.backend.get(&self.key)? else { return Ok(None) };
        let doc = StoreDocument::from_json(&raw)?;
        if doc.unreadable_count() > 0 {
            warn!(key = %self.key, kept_aside = doc.unreadable_count(), "stored document has undecodable records");
        }
        Ok(Some(doc))
    }

    /// Write the whole document. Best effort: failures are logged and dropped.
    pub fn save(&self, doc: &StoreDocument) {
        if let Err(e) = self.try_save(doc) {
            error!(key = %self.key, error = %e, "failed to persist document");
        }
    }

    fn try_save(&self, doc: &StoreDocument) -> Result<(), ServiceError> {
        let raw = doc.to_json()?;
        self.backend.set(&self.key, &raw)?;
        Ok(())
    }

    /// Persist the seed document if the slot holds no JSON object yet.
    /// Returns whether a write happened.
    pub fn ensure_seeded(&self) -> bool {
        match self.try_load() {
            Ok(Some(_)) => false,
            Ok(None) | Err(_) => {
                info!(key = %self.key, "seeding store with default admins");
                self.save(&seed::default_document());
                true
            }
        }
    }

    /// Drop the stored document; the next load sees seed data again.
    pub fn reset(&self) -> bool {
        match self.backend.remove(&self.key) {
            Ok(existed) => existed,
            Err(e) => {
                error!(key = %self.key, error = %e, "failed to reset store");
                false
            }
        }
    }

    /// Load, apply `f`, and save when it reports a change.
    /// `Ok(false)` means the target was not found; nothing is written.
    fn mutate<F>(&self, op: &'static str, f: F) -> bool
    where
        F: FnOnce(&mut StoreDocument) -> Result<bool, ServiceError>,
    {
        let mut doc = self.load();
        match f(&mut doc) {
            Ok(true) => {
                self.save(&doc);
                true
            }
            Ok(false) => {
                debug!(op, "target not found");
                false
            }
            Err(e) => {
                warn!(op, error = %e, "operation failed");
                false
            }
        }
    }

    /// Load, insert via `f`, save, and hand back the new record.
    fn insert<T, F>(&self, op: &'static str, f: F) -> Option<T>
    where
        F: FnOnce(&mut StoreDocument) -> Result<T, ServiceError>,
    {
        let mut doc = self.load();
        match f(&mut doc) {
            Ok(record) => {
                self.save(&doc);
                Some(record)
            }
            Err(e) => {
                warn!(op, error = %e, "operation failed");
                None
            }
        }
    }
}

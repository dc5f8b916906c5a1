//! Record store for the job portal demo.
//! - `storage`: pluggable key-value slots (in-memory, file-backed).
//! - `store`: the whole-document record store and its per-collection operations.
//! - Callers get booleans, options and lists back; failures are logged, not raised.

pub mod errors;
pub mod storage;
pub mod store;
#[cfg(test)]
pub mod test_support;

pub use store::{RecordStore, StoreDocument};

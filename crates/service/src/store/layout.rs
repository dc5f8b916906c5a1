//! JSON layout of the persisted blob.
//!
//! The blob is decoded collection by collection and record by record. A
//! record that does not fit its type is kept aside verbatim and written back
//! after the typed records, so one odd entry never costs the rest of the
//! document. Top-level keys outside the five collections are carried along
//! the same way. Only a blob that is not a JSON object counts as corrupt.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use models::record::Record;

use super::StoreDocument;
use crate::errors::ServiceError;

const USERS: &str = "users";
const JOBS: &str = "jobs";
const APPLICATIONS: &str = "applications";
const DOCUMENTS: &str = "documents";
const PROFILE_UPDATE_REQUESTS: &str = "profileUpdateRequests";

/// Stored data the typed collections could not take.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Unreadable {
    records: BTreeMap<&'static str, Vec<Value>>,
    other: Map<String, Value>,
}

impl Unreadable {
    fn keep(&mut self, collection: &'static str, value: Value) {
        self.records.entry(collection).or_default().push(value);
    }

    fn records(&self, collection: &str) -> &[Value] {
        self.records.get(collection).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn len(&self) -> usize { self.records.values().map(Vec::len).sum() }
}

impl StoreDocument {
    /// Decode a stored blob. Fails only on invalid JSON or a non-object root.
    pub fn from_json(raw: &str) -> Result<Self, ServiceError> {
        let mut top = match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => map,
            other => return Err(ServiceError::Corrupt(format!("document root is {}", kind(&other)))),
        };
        let mut unreadable = Unreadable::default();
        let users = take_collection(&mut top, USERS, &mut unreadable);
        let jobs = take_collection(&mut top, JOBS, &mut unreadable);
        let applications = take_collection(&mut top, APPLICATIONS, &mut unreadable);
        let documents = take_collection(&mut top, DOCUMENTS, &mut unreadable);
        let profile_update_requests = take_collection(&mut top, PROFILE_UPDATE_REQUESTS, &mut unreadable);
        unreadable.other = top;
        Ok(Self { users, jobs, applications, documents, profile_update_requests, unreadable })
    }

    /// Encode the blob: each collection lists typed records first, then the
    /// ones kept aside on load.
    pub fn to_json(&self) -> Result<String, ServiceError> {
        let mut top = Map::new();
        top.insert(USERS.into(), collection_value(&self.users, self.unreadable.records(USERS))?);
        top.insert(JOBS.into(), collection_value(&self.jobs, self.unreadable.records(JOBS))?);
        top.insert(
            APPLICATIONS.into(),
            collection_value(&self.applications, self.unreadable.records(APPLICATIONS))?,
        );
        top.insert(DOCUMENTS.into(), collection_value(&self.documents, self.unreadable.records(DOCUMENTS))?);
        top.insert(
            PROFILE_UPDATE_REQUESTS.into(),
            collection_value(&self.profile_update_requests, self.unreadable.records(PROFILE_UPDATE_REQUESTS))?,
        );
        for (k, v) in &self.unreadable.other {
            top.entry(k.clone()).or_insert_with(|| v.clone());
        }
        Ok(serde_json::to_string(&Value::Object(top))?)
    }

    /// Number of stored records carried along without being decoded.
    pub fn unreadable_count(&self) -> usize { self.unreadable.len() }
}

fn take_collection<T>(top: &mut Map<String, Value>, key: &'static str, unreadable: &mut Unreadable) -> Vec<Record<T>>
where
    T: Serialize + DeserializeOwned,
{
    let items = match top.remove(key) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!(collection = key, found = kind(&other), "collection is not an array; keeping it aside");
            unreadable.keep(key, other);
            return Vec::new();
        }
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let decoded = match &item {
            Value::Object(map) => Record::from_map(map.clone()).map_err(|e| e.to_string()),
            other => Err(format!("record is {}", kind(other))),
        };
        match decoded {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(collection = key, index, %error, "keeping undecodable record aside");
                unreadable.keep(key, item);
            }
        }
    }
    records
}

fn collection_value<T>(records: &[Record<T>], kept: &[Value]) -> Result<Value, ServiceError>
where
    T: Serialize + DeserializeOwned,
{
    let mut out = Vec::with_capacity(records.len() + kept.len());
    for record in records {
        out.push(Value::Object(record.to_map()?));
    }
    out.extend(kept.iter().cloned());
    Ok(Value::Array(out))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

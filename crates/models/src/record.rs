//! Stored records that keep the JSON keys their type does not model.
//!
//! The front-end writes whatever its forms hold, so a stored user or job can
//! carry keys no field here knows about. `Record<T>` decodes the known part
//! into `T` and carries the rest along untouched, so a read-modify-write
//! cycle never drops data.

use std::ops::{Deref, DerefMut};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::ModelError;

#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    value: T,
    extra: Map<String, Value>,
}

impl<T> Record<T> {
    pub fn new(value: T) -> Self { Self { value, extra: Map::new() } }

    /// Keys stored alongside the typed fields.
    pub fn extra(&self) -> &Map<String, Value> { &self.extra }
}

impl<T> Record<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Decode a stored JSON object; keys `T` does not emit land in `extra`.
    pub fn from_map(mut raw: Map<String, Value>) -> Result<Self, ModelError> {
        let value: T = serde_json::from_value(Value::Object(raw.clone())).map_err(|e| ModelError::Decode(e.to_string()))?;
        let known = typed_fields(&value)?;
        raw.retain(|k, _| !known.contains_key(k));
        Ok(Self { value, extra: raw })
    }

    /// The stored JSON object: typed fields, then extra keys they do not shadow.
    pub fn to_map(&self) -> Result<Map<String, Value>, ModelError> {
        let mut out = typed_fields(&self.value)?;
        for (k, v) in &self.extra {
            out.entry(k.clone()).or_insert_with(|| v.clone());
        }
        Ok(out)
    }
}

fn typed_fields<T: Serialize>(value: &T) -> Result<Map<String, Value>, ModelError> {
    match serde_json::to_value(value).map_err(|e| ModelError::Decode(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ModelError::Decode(format!("record is not an object: {other}"))),
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T { &self.value }
}

impl<T> DerefMut for Record<T> {
    fn deref_mut(&mut self) -> &mut T { &mut self.value }
}

impl<T> Serialize for Record<T>
where
    T: Serialize + DeserializeOwned,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Record<T>
where
    T: Serialize + DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::deserialize(deserializer)?;
        Self::from_map(raw).map_err(serde::de::Error::custom)
    }
}

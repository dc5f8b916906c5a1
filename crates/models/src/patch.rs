use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelError;
use crate::record::Record;

/// Free-form field overrides, keyed by the record's JSON field names.
pub type Patch = Map<String, Value>;

/// Shallow-merge `patch` over the stored form of `record`; patch keys win
/// and keys outside `T`'s schema are kept on the result.
///
/// Fails if the merged object no longer decodes into `T`.
pub fn apply_patch<T>(record: &Record<T>, patch: &Patch) -> Result<Record<T>, ModelError>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = record.to_map()?;
    for (k, v) in patch {
        merged.insert(k.clone(), v.clone());
    }
    Record::from_map(merged).map_err(|e| ModelError::Patch(e.to_string()))
}

/// Build a patch from a JSON value; anything but an object is rejected.
pub fn patch_from_value(value: Value) -> Result<Patch, ModelError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ModelError::Validation(format!("patch must be a JSON object, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        name: String,
        count: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    fn sample() -> Record<Sample> {
        Record::new(Sample { name: "a".into(), count: 1, note: None })
    }

    #[test]
    fn patch_overrides_and_adds_fields() -> Result<(), anyhow::Error> {
        let patch = patch_from_value(json!({ "count": 5, "note": "hi" }))?;
        let out = apply_patch(&sample(), &patch)?;
        assert_eq!(*out, Sample { name: "a".into(), count: 5, note: Some("hi".into()) });
        Ok(())
    }

    #[test]
    fn patch_keeps_keys_outside_the_schema() -> Result<(), anyhow::Error> {
        let first = apply_patch(&sample(), &patch_from_value(json!({ "nickname": "Wally" }))?)?;
        let second = apply_patch(&first, &patch_from_value(json!({ "count": 2 }))?)?;
        assert_eq!(second.count, 2);
        assert_eq!(second.extra().get("nickname"), Some(&json!("Wally")));
        Ok(())
    }

    #[test]
    fn patch_with_wrong_type_fails() {
        let patch = patch_from_value(json!({ "count": "many" })).unwrap();
        assert!(matches!(apply_patch(&sample(), &patch), Err(ModelError::Patch(_))));
    }

    #[test]
    fn non_object_patch_is_rejected() {
        assert!(patch_from_value(json!([1, 2])).is_err());
    }
}

//! Dynamic-content builder for remote widget data payloads.
//!
//! Remote widget trees reference host data through dotted paths; this crate
//! assembles the JSON documents those paths resolve against. Values are
//! normalized through [`serde_json::Value`] (integer widths widen to i64,
//! `f32` to f64), keys keep insertion order, and `null` is rejected anywhere
//! in the tree since the rendering host has no representation for it.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use thiserror::Error;

pub type DynamicResult<T> = Result<T, DynamicError>;

#[derive(Error, Debug)]
pub enum DynamicError {
    #[error("Invalid key `{key}`: a non-empty key is required")]
    EmptyKey { key: String },

    #[error("Dynamic content does not allow null values")]
    NullValue,

    #[error("Failed to serialize dynamic content: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accumulates an ordered root map of normalized JSON values.
#[derive(Debug, Clone, Default)]
pub struct DynamicContentBuilder {
    root: IndexMap<String, JsonValue>,
}

impl DynamicContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a root entry. The value tree must be null-free.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> DynamicResult<&mut Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(DynamicError::EmptyKey { key });
        }
        let value = value.into();
        reject_nulls(&value)?;
        self.root.insert(key, value);
        Ok(self)
    }

    /// Snapshot of the accumulated root map.
    pub fn build(&self) -> IndexMap<String, JsonValue> {
        self.root.clone()
    }

    pub fn to_json_string(&self, indented: bool) -> DynamicResult<String> {
        let text = if indented {
            serde_json::to_string_pretty(&self.root)?
        } else {
            serde_json::to_string(&self.root)?
        };
        Ok(text)
    }
}

fn reject_nulls(value: &JsonValue) -> DynamicResult<()> {
    match value {
        JsonValue::Null => Err(DynamicError::NullValue),
        JsonValue::Array(items) => {
            for item in items {
                reject_nulls(item)?;
            }
            Ok(())
        }
        JsonValue::Object(entries) => {
            for entry in entries.values() {
                reject_nulls(entry)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_normalizes_supported_types() {
        let mut builder = DynamicContentBuilder::new();
        builder
            .set(
                "payload",
                json!({
                    "int": 7,
                    "float": 3.14f32,
                    "double": 2.5,
                    "bool": true,
                    "string": "text",
                    "list": [1, 2.0, false, "done"],
                    "map": { "nested": 42 },
                }),
            )
            .unwrap();

        let root = builder.build();
        let payload = &root["payload"];
        assert_eq!(payload["int"], json!(7));
        assert!((payload["float"].as_f64().unwrap() - 3.14).abs() < 1e-4);
        assert_eq!(payload["double"], json!(2.5));
        assert_eq!(payload["bool"], json!(true));
        assert_eq!(payload["string"], json!("text"));
        assert_eq!(payload["list"], json!([1, 2.0, false, "done"]));
        assert_eq!(payload["map"]["nested"], json!(42));
    }

    #[test]
    fn test_set_rejects_blank_key() {
        let mut builder = DynamicContentBuilder::new();
        assert!(matches!(
            builder.set("  ", 1),
            Err(DynamicError::EmptyKey { .. })
        ));
    }

    #[test]
    fn test_set_rejects_nested_null() {
        let mut builder = DynamicContentBuilder::new();
        assert!(matches!(
            builder.set("bad", json!({ "inner": [1, null] })),
            Err(DynamicError::NullValue)
        ));
    }

    #[test]
    fn test_overwrite_keeps_key_position() {
        let mut builder = DynamicContentBuilder::new();
        builder.set("first", 1).unwrap();
        builder.set("second", 2).unwrap();
        builder.set("first", 3).unwrap();

        let keys: Vec<String> = builder.build().keys().cloned().collect();
        assert_eq!(keys, ["first", "second"]);
    }

    #[test]
    fn test_json_output_forms() {
        let mut builder = DynamicContentBuilder::new();
        builder.set("greeting", "hola").unwrap();

        assert_eq!(
            builder.to_json_string(false).unwrap(),
            "{\"greeting\":\"hola\"}"
        );
        assert!(builder.to_json_string(true).unwrap().contains("\n"));
    }
}

// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One JSON object from the dataset (or from the output file).
//
// Records are schema-free: the only structure we rely on is
// that the configured id, search, and display fields exist.
// Every other field is carried through untouched, in its
// original order, so a labeled record written back out is
// the input record plus one extra key at the end.
//
// serde_json is built with `preserve_order`, which makes
// Map an insertion-ordered map.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::AnnotateError;

/// A single schema-free JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a parsed JSON value, rejecting anything that is not an object.
    /// `line` is the 1-based source line, kept for the error message.
    pub fn from_value(value: Value, line: usize) -> Result<Self, AnnotateError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(AnnotateError::NotAnObject {
                line,
                found: kind_of(&other),
            }),
        }
    }

    /// Look up a field by exact key. A missing key is a schema error.
    pub fn get(&self, field: &str) -> Result<&Value, AnnotateError> {
        self.fields
            .get(field)
            .ok_or_else(|| AnnotateError::MissingField {
                field:  field.to_string(),
                record: Value::Object(self.fields.clone()).to_string(),
            })
    }

    /// The field rendered as text for matching and display.
    ///
    /// Strings are returned as-is; any other JSON value is
    /// rendered as its compact JSON text (`1`, `true`, `null`).
    pub fn text(&self, field: &str) -> Result<Cow<'_, str>, AnnotateError> {
        Ok(match self.get(field)? {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other            => Cow::Owned(other.to_string()),
        })
    }

    /// A hashable key for the identifier field.
    ///
    /// Uses the compact JSON text of the value so that `1` and
    /// `"1"` stay distinct, exactly like JSON value equality.
    pub fn id_key(&self, id_field: &str) -> Result<String, AnnotateError> {
        Ok(self.get(id_field)?.to_string())
    }

    /// Attach (or overwrite) the label field. New keys go last.
    pub fn with_label(mut self, label_name: &str, label: &str) -> Self {
        self.fields
            .insert(label_name.to_string(), Value::String(label.to_string()));
        self
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object",
    }
}

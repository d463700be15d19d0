use crate::{FieldMap, FieldValue};
use serde::{Deserialize, Serialize};

/// One directory record.
///
/// The id is the value the record was created under (the directory's id
/// field at creation time) and never changes afterwards, even if the id
/// field's stored value is later targeted by an update. The engine hands
/// out owned copies of entries, never views into its internal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub fields: FieldMap,
}

impl Entry {
    /// Creates an entry from an id and its field bag.
    #[must_use]
    pub fn new(id: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Returns the value stored under `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Extracts a string field value.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(FieldValue::as_str)
    }

    /// Extracts an integer field value.
    #[must_use]
    pub fn get_int(&self, field: &str) -> Option<i64> {
        self.fields.get(field).and_then(FieldValue::as_int)
    }
}

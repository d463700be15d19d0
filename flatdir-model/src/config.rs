use crate::FieldMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Construction-time configuration for one directory.
///
/// Created once by the embedding application and immutable afterwards.
/// `schema_fields` may be empty; the resolved schema is then inferred from
/// the id/password fields plus an optional sample record
/// (see [`DirectoryConfig::resolve_schema`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Unique directory name, the key under which sessions are opened.
    pub name: String,
    /// Primary-key column: unique, required, never empty.
    pub id_field: String,
    /// Credential column checked by `authenticate`. When `None`,
    /// authentication always fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_field: Option<String>,
    /// Explicitly declared field names. May be empty.
    #[serde(default)]
    pub schema_fields: HashSet<String>,
}

impl DirectoryConfig {
    /// Configuration with an explicit declared schema.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id_field: impl Into<String>,
        password_field: Option<&str>,
        schema_fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            id_field: id_field.into(),
            password_field: password_field.map(String::from),
            schema_fields: schema_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Configuration with no declared schema; the resolved schema comes
    /// from the id/password fields and an optional sample record.
    #[must_use]
    pub fn inferred(
        name: impl Into<String>,
        id_field: impl Into<String>,
        password_field: Option<&str>,
    ) -> Self {
        Self::new(name, id_field, password_field, Vec::<String>::new())
    }

    /// Resolves the directory's final field set: declared fields, the id
    /// field, the password field (when configured), and every field seen
    /// in `sample`.
    ///
    /// Pure; the engine calls this once at directory construction and the
    /// result never shrinks afterwards.
    #[must_use]
    pub fn resolve_schema(&self, sample: Option<&FieldMap>) -> HashSet<String> {
        let mut schema = self.schema_fields.clone();
        schema.insert(self.id_field.clone());
        if let Some(pw) = &self.password_field {
            schema.insert(pw.clone());
        }
        if let Some(sample) = sample {
            schema.extend(sample.keys().cloned());
        }
        schema
    }
}

//! The authoritative entry storage for one directory.
//!
//! `EntryStore` is the unlocked single-writer state; [`crate::Session`]
//! wraps it in a reader/writer lock. Entries are kept as id-keyed field
//! maps with a side list recording creation order, which is the default
//! listing order.

use crate::error::{DirectoryError, DirectoryResult};
use flatdir_model::{DirectoryConfig, Entry, FieldMap, FieldValue};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// In-memory id-to-record store with a schema fixed at construction.
///
/// Fields outside the resolved schema are silently dropped on write; the
/// id field value is fixed at creation and cannot be altered by updates.
#[derive(Debug)]
pub struct EntryStore {
    name: String,
    id_field: String,
    password_field: Option<String>,
    schema: HashSet<String>,
    rows: HashMap<String, FieldMap>,
    /// Ids in creation order; always in sync with `rows`.
    order: Vec<String>,
}

impl EntryStore {
    /// Creates an empty store for `config`, resolving the schema once from
    /// the declared fields plus an optional sample record.
    #[must_use]
    pub fn new(config: &DirectoryConfig, sample: Option<&FieldMap>) -> Self {
        Self {
            name: config.name.clone(),
            id_field: config.id_field.clone(),
            password_field: config.password_field.clone(),
            schema: config.resolve_schema(sample),
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The resolved field set. Never shrinks over the store's lifetime.
    #[must_use]
    pub fn schema(&self) -> &HashSet<String> {
        &self.schema
    }

    /// The directory name this store belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The primary-key field name.
    #[must_use]
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    // ── Mutation ─────────────────────────────────────────────────

    /// Stores a new entry from `fields`.
    ///
    /// The id is taken from the value under the id field, which must be a
    /// non-empty string. Fields outside the schema are dropped, not
    /// rejected. Fails with [`DirectoryError::DuplicateEntry`] if the id
    /// is already taken, leaving the store untouched.
    pub fn create(&mut self, fields: FieldMap) -> DirectoryResult<Entry> {
        let id = match fields.get(&self.id_field) {
            None => {
                return Err(DirectoryError::InvalidEntry(format!(
                    "no value under id field '{}'",
                    self.id_field
                )));
            }
            Some(FieldValue::Int(_)) => {
                return Err(DirectoryError::InvalidEntry(format!(
                    "id field '{}' must hold a string",
                    self.id_field
                )));
            }
            Some(FieldValue::Str(s)) if s.is_empty() => {
                return Err(DirectoryError::InvalidEntry(format!(
                    "id field '{}' is empty",
                    self.id_field
                )));
            }
            Some(FieldValue::Str(s)) => s.clone(),
        };
        if self.rows.contains_key(&id) {
            return Err(DirectoryError::DuplicateEntry(id));
        }

        let total = fields.len();
        let retained: FieldMap = fields
            .into_iter()
            .filter(|(name, _)| self.schema.contains(name))
            .collect();
        if retained.len() < total {
            debug!(
                directory = %self.name,
                id = %id,
                dropped = total - retained.len(),
                "dropped fields outside the resolved schema"
            );
        }

        self.rows.insert(id.clone(), retained.clone());
        self.order.push(id.clone());
        debug!(directory = %self.name, id = %id, "created entry");
        Ok(Entry::new(id, retained))
    }

    /// Merges `fields` into the entry with the given id.
    ///
    /// Only supplied fields change; everything else keeps its value. The
    /// id field and fields outside the schema are ignored. Fails with
    /// [`DirectoryError::EntryNotFound`] if the id is absent, changing
    /// nothing.
    pub fn update(&mut self, id: &str, fields: FieldMap) -> DirectoryResult<()> {
        let row = self
            .rows
            .get_mut(id)
            .ok_or_else(|| DirectoryError::EntryNotFound(id.to_string()))?;
        for (name, value) in fields {
            if name == self.id_field || !self.schema.contains(&name) {
                continue;
            }
            row.insert(name, value);
        }
        debug!(directory = %self.name, id = %id, "updated entry");
        Ok(())
    }

    /// Removes the entry with the given id. Deleting an absent id is a
    /// no-op.
    pub fn delete(&mut self, id: &str) {
        if self.rows.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
            debug!(directory = %self.name, id = %id, "deleted entry");
        }
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Looks up an entry by exact id. Returns an owned copy.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Entry> {
        self.rows
            .get(id)
            .map(|fields| Entry::new(id, fields.clone()))
    }

    /// Whether an entry exists under the given id.
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    /// All entries in creation order, as owned copies.
    #[must_use]
    pub fn list(&self) -> Vec<Entry> {
        self.order
            .iter()
            .filter_map(|id| {
                self.rows
                    .get(id)
                    .map(|fields| Entry::new(id.clone(), fields.clone()))
            })
            .collect()
    }

    /// Checks `candidate` against the entry's password field value.
    ///
    /// Plain case-sensitive equality, no hashing: this store backs demo
    /// and test setups, it is not a security boundary. Always false when
    /// the directory has no password field, when the entry is absent, or
    /// when the stored value is not a string.
    #[must_use]
    pub fn authenticate(&self, id: &str, candidate: &str) -> bool {
        let Some(pw_field) = &self.password_field else {
            warn!(
                directory = %self.name,
                "authenticate called on a directory with no password field"
            );
            return false;
        };
        self.rows
            .get(id)
            .and_then(|fields| fields.get(pw_field))
            .and_then(FieldValue::as_str)
            .is_some_and(|stored| stored == candidate)
    }
}

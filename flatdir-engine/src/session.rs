//! The public facade over one directory's store.

use crate::error::DirectoryResult;
use crate::filter::matches;
use crate::order::{SortDirection, sort_entries};
use crate::store::EntryStore;
use flatdir_model::{Entry, FieldMap, FieldValue};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// A handle to one directory, the entire surface external collaborators
/// may rely on.
///
/// Sessions are cheap to clone and safe to share across threads: all
/// sessions on a directory share one reader/writer lock, so reads run
/// concurrently while mutations are exclusive, and every operation
/// observes a consistent snapshot. Distinct directories never share a
/// lock.
///
/// Lock guards are taken per operation. Poisoning can only arise from a
/// panic inside the store's non-panicking operations, so acquisition
/// failures propagate as panics rather than a dedicated error variant.
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<RwLock<EntryStore>>,
}

impl Session {
    pub(crate) fn new(store: Arc<RwLock<EntryStore>>) -> Self {
        Self { store }
    }

    // ── CRUD ─────────────────────────────────────────────────────

    /// Creates an entry from a field bag; the id comes from the value
    /// under the directory's id field. Fails if that id already exists.
    pub fn create_entry(&self, fields: FieldMap) -> DirectoryResult<Entry> {
        self.store.write().expect("directory lock poisoned").create(fields)
    }

    /// Creates an entry from a prebuilt record. The record's id takes
    /// precedence over any value in its field bag. Same duplicate-id rule
    /// as [`Session::create_entry`].
    pub fn create_entry_from(&self, record: Entry) -> DirectoryResult<Entry> {
        let mut store = self.store.write().expect("directory lock poisoned");
        let mut fields = record.fields;
        fields.insert(store.id_field().to_string(), FieldValue::from(record.id));
        store.create(fields)
    }

    /// Looks up an entry by id. Absence is not an error.
    #[must_use]
    pub fn get_entry(&self, id: &str) -> Option<Entry> {
        self.store.read().expect("directory lock poisoned").get(id)
    }

    /// Whether an entry exists under the given id.
    #[must_use]
    pub fn has_entry(&self, id: &str) -> bool {
        self.store.read().expect("directory lock poisoned").has(id)
    }

    /// Merges `fields` into the entry with the given id; unsupplied fields
    /// keep their values. Fails if the id does not exist.
    pub fn update_entry(&self, id: &str, fields: FieldMap) -> DirectoryResult<()> {
        self.store.write().expect("directory lock poisoned").update(id, fields)
    }

    /// Removes an entry. Deleting an absent id is a no-op.
    pub fn delete_entry(&self, id: &str) {
        self.store.write().expect("directory lock poisoned").delete(id);
    }

    /// All entries in creation order.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.store.read().expect("directory lock poisoned").list()
    }

    /// Checks a candidate password against the entry's credential field.
    #[must_use]
    pub fn authenticate(&self, id: &str, candidate: &str) -> bool {
        self.store
            .read()
            .expect("directory lock poisoned")
            .authenticate(id, candidate)
    }

    // ── Query & projection ───────────────────────────────────────

    /// Entries matching `filter` by exact equality, in creation order.
    #[must_use]
    pub fn query(&self, filter: &FieldMap) -> Vec<Entry> {
        self.query_ordered(filter, &HashSet::new(), &[])
    }

    /// Entries matching `filter`, with the fields in `fulltext` matched by
    /// case-insensitive prefix instead of equality.
    #[must_use]
    pub fn query_fulltext(&self, filter: &FieldMap, fulltext: &HashSet<String>) -> Vec<Entry> {
        self.query_ordered(filter, fulltext, &[])
    }

    /// Full query: filter, then stable multi-key sort. An empty `order_by`
    /// keeps creation order.
    #[must_use]
    pub fn query_ordered(
        &self,
        filter: &FieldMap,
        fulltext: &HashSet<String>,
        order_by: &[(String, SortDirection)],
    ) -> Vec<Entry> {
        let store = self.store.read().expect("directory lock poisoned");
        let mut results: Vec<Entry> = store
            .list()
            .into_iter()
            .filter(|entry| matches(entry, filter, fulltext, store.schema()))
            .collect();
        sort_entries(&mut results, order_by);
        results
    }

    /// The named column's value for every entry matching `filter`, in
    /// post-filter order, duplicates preserved. Entries with no value
    /// under the column contribute `None`.
    #[must_use]
    pub fn get_projection(&self, filter: &FieldMap, column: &str) -> Vec<Option<FieldValue>> {
        self.get_projection_fulltext(filter, &HashSet::new(), column)
    }

    /// Projection with fulltext filter fields, see
    /// [`Session::get_projection`].
    #[must_use]
    pub fn get_projection_fulltext(
        &self,
        filter: &FieldMap,
        fulltext: &HashSet<String>,
        column: &str,
    ) -> Vec<Option<FieldValue>> {
        self.query_fulltext(filter, fulltext)
            .into_iter()
            .map(|entry| entry.fields.get(column).cloned())
            .collect()
    }

    // ── Introspection ────────────────────────────────────────────

    /// The directory's resolved field set.
    #[must_use]
    pub fn schema(&self) -> HashSet<String> {
        self.store
            .read()
            .expect("directory lock poisoned")
            .schema()
            .clone()
    }

    /// The directory name this session is bound to.
    #[must_use]
    pub fn directory_name(&self) -> String {
        self.store
            .read()
            .expect("directory lock poisoned")
            .name()
            .to_string()
    }
}

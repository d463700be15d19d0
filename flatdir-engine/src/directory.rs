//! Directory construction and by-name lookup.

use crate::error::{DirectoryError, DirectoryResult};
use crate::session::Session;
use crate::store::EntryStore;
use flatdir_model::{DirectoryConfig, FieldMap};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::info;

/// One live directory: immutable configuration plus the shared store.
///
/// The schema is resolved exactly once here, at construction; sessions
/// handed out afterwards all observe the same field set.
#[derive(Debug)]
pub struct Directory {
    config: DirectoryConfig,
    store: Arc<RwLock<EntryStore>>,
}

impl Directory {
    /// Builds a directory from its configuration alone.
    #[must_use]
    pub fn new(config: DirectoryConfig) -> Self {
        Self::build(config, None)
    }

    /// Builds a directory whose schema is additionally inferred from the
    /// fields of `sample`. The sample record is used only for schema
    /// resolution; it is not stored.
    #[must_use]
    pub fn with_sample(config: DirectoryConfig, sample: &FieldMap) -> Self {
        Self::build(config, Some(sample))
    }

    fn build(config: DirectoryConfig, sample: Option<&FieldMap>) -> Self {
        let store = EntryStore::new(&config, sample);
        info!(directory = %config.name, fields = store.schema().len(), "directory created");
        Self {
            config,
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// The directory's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The configuration this directory was built from.
    #[must_use]
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Opens a session. Sessions are cheap handles onto the shared store;
    /// any number may be open at once.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(Arc::clone(&self.store))
    }
}

/// Holds directories by name and hands out sessions.
///
/// The registry is an explicit dependency: construct it at startup,
/// register every directory, and pass it to whatever opens sessions.
/// There is no process-global registry.
#[derive(Debug, Default)]
pub struct DirectoryRegistry {
    directories: HashMap<String, Directory>,
}

impl DirectoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a directory under its configured name, replacing any
    /// previous directory with that name.
    pub fn register(&mut self, directory: Directory) {
        self.directories
            .insert(directory.name().to_string(), directory);
    }

    /// Looks up a directory by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Directory> {
        self.directories.get(name)
    }

    /// Opens a session on the named directory. Fails with
    /// [`DirectoryError::NoSuchDirectory`] for an unknown name.
    pub fn open_session(&self, name: &str) -> DirectoryResult<Session> {
        self.directories
            .get(name)
            .map(Directory::session)
            .ok_or_else(|| DirectoryError::NoSuchDirectory(name.to_string()))
    }

    /// Names of all registered directories, in no particular order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.directories.keys().map(String::as_str).collect()
    }
}

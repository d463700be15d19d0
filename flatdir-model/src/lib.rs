//! Core data model for flatdir.
//!
//! Defines the types shared between the directory engine and its callers:
//! - [`FieldValue`] — the tagged scalar stored under a field name (string or integer)
//! - [`FieldMap`] — a record's field bag, also used for filters and update payloads
//! - [`Entry`] — one directory record: a unique id plus its fields
//! - [`DirectoryConfig`] — a directory's construction-time configuration
//!   (name, id field, optional password field, declared schema)
//!
//! Schema resolution lives here too: [`DirectoryConfig::resolve_schema`]
//! merges the declared field set with the id/password fields and any fields
//! observed in a sample record. The engine computes it once per directory
//! and treats the result as immutable.

mod config;
mod entry;
mod value;

pub use config::DirectoryConfig;
pub use entry::Entry;
pub use value::{FieldMap, FieldValue};

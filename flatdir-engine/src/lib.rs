//! Schema-driven in-memory directory engine.
//!
//! A directory is a named, single-table mutable store with a fixed schema
//! resolved once at construction. The engine provides:
//!
//! - [`EntryStore`] — the authoritative id-to-record mapping (create,
//!   merge-update, delete, credential check), insertion order preserved
//! - [`matches`] — predicate evaluation for filters, with per-field
//!   fulltext (case-insensitive prefix) semantics
//! - [`sort_entries`] — stable multi-key, type-aware ordering
//! - [`Session`] — the public CRUD/query/projection facade, safe to share
//!   across threads (reads run concurrently, mutations are exclusive)
//! - [`Directory`] and [`DirectoryRegistry`] — construction and by-name
//!   session lookup, wired by explicit dependency injection
//!
//! The engine is entirely in-memory and synchronous: no persistence, no
//! transactions across entries, and no network surface. Host applications
//! (authentication filters, UI resolvers) consume it through [`Session`]
//! only.

mod directory;
mod error;
mod filter;
mod order;
mod session;
mod store;

pub use directory::{Directory, DirectoryRegistry};
pub use error::{DirectoryError, DirectoryResult};
pub use filter::matches;
pub use order::{OrderBy, SortDirection, sort_entries};
pub use session::Session;
pub use store::EntryStore;

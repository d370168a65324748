//! Storage Module
//!
//! Whole-document persistence for record collections.
//!
//! ## Responsibilities
//! - Load every record of a collection in storage order
//! - Replace the whole collection in one write
//! - Distinguish a missing backing store from an empty one
//!
//! ## File Format
//! ```text
//! [
//!     {
//!         "field": "value",
//!         ...
//!     },
//!     ...
//! ]
//! ```
//! A JSON array, pretty-printed with 4-space indentation. Every mutating
//! operation rewrites the file in full; the last successful write wins.

mod file;
mod memory;

pub use file::JsonFileCollection;
pub use memory::MemoryCollection;

use crate::error::Result;

/// Storage port: load-all / save-all over an ordered collection
///
/// Stores hold no records between operations; each call goes back to the
/// collection, which is the single source of truth.
pub trait Collection<T> {
    /// Load all records in insertion order
    fn load_all(&self) -> Result<Vec<T>>;

    /// Replace the stored collection with `records`
    fn save_all(&self, records: &[T]) -> Result<()>;
}

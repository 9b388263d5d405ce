//! # Snapshot Storage
//!
//! An address book is persisted as one snapshot: the complete, ordered list of records written
//! as a single JSON document. Saving replaces the previous snapshot as a whole, loading replaces
//! the in-memory book as a whole.
//!
//! ## Layers
//!
//! - [`SnapshotStore`] moves raw snapshot text in and out of somewhere durable. It knows nothing
//!   about records.
//! - [`encode`] / [`decode`] turn an [`AddressBook`] into snapshot text and back, re-validating
//!   every field on the way in.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file, replaced atomically (temp file + rename).
//! - [`memory::InMemoryStore`]: a `RefCell`-backed string for tests.
//!
//! ## Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Alice", "phones": ["123456"], "birthday": "1990-05-15" },
//!     { "name": "Bob", "phones": [], "birthday": null }
//!   ]
//! }
//! ```

use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Raw snapshot I/O.
pub trait SnapshotStore {
    /// Read the stored snapshot text.
    /// Returns `BookError::SnapshotNotFound` if nothing has been saved yet.
    fn read_snapshot(&self) -> Result<String>;

    /// Replace the stored snapshot.
    /// MUST be atomic: readers see either the old or the new snapshot, never a mix.
    fn write_snapshot(&self, content: &str) -> Result<()>;

    /// Where the snapshot lives, for messages. Virtual for non-file stores.
    fn location(&self) -> PathBuf;
}

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    records: &'a [Record],
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    records: Vec<Record>,
}

pub fn encode(book: &AddressBook) -> Result<String> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        records: book.records(),
    };
    serde_json::to_string_pretty(&snapshot).map_err(BookError::encode)
}

/// Parse snapshot text into a fresh book using `page_size` for listings.
pub fn decode(content: &str, page_size: usize) -> Result<AddressBook> {
    let snapshot: SnapshotIn = serde_json::from_str(content)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(BookError::CorruptData(format!(
            "unsupported snapshot version {}",
            snapshot.version
        )));
    }
    if let Some(pos) = snapshot.records.iter().position(|r| r.name().is_empty()) {
        return Err(BookError::CorruptData(format!(
            "record {} has no name",
            pos + 1
        )));
    }
    AddressBook::from_records(snapshot.records, page_size)
}

impl AddressBook {
    /// Write the whole book to `dest`, replacing what was there.
    pub fn save<S: SnapshotStore>(&self, dest: &S) -> Result<()> {
        let content = encode(self)?;
        dest.write_snapshot(&content)?;
        tracing::debug!(
            records = self.count(),
            location = %dest.location().display(),
            "saved address book"
        );
        Ok(())
    }

    /// Replace this book's contents with the snapshot in `source`.
    ///
    /// On any error the book is left as it was.
    pub fn load<S: SnapshotStore>(&mut self, source: &S) -> Result<()> {
        let content = source.read_snapshot()?;
        let loaded = decode(&content, self.page_size())?;
        tracing::debug!(
            records = loaded.count(),
            location = %source.location().display(),
            "loaded address book"
        );
        *self = loaded;
        Ok(())
    }
}

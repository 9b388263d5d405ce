use super::SnapshotStore;
use crate::error::{BookError, Result};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory snapshot storage for testing.
///
/// Uses `RefCell` so the `&self` methods of [`SnapshotStore`] can update it.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    content: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `content`, valid or not.
    pub fn with_content(content: &str) -> Self {
        let store = Self::new();
        *store.content.borrow_mut() = Some(content.to_string());
        store
    }

    /// Make every following write fail with an I/O error.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl SnapshotStore for InMemoryStore {
    fn read_snapshot(&self) -> Result<String> {
        self.content
            .borrow()
            .clone()
            .ok_or_else(|| BookError::SnapshotNotFound(self.location()))
    }

    fn write_snapshot(&self, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(BookError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        *self.content.borrow_mut() = Some(content.to_string());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}

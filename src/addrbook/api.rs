//! # API Facade
//!
//! [`ContactsApi`] is the single entry point UIs use. It owns one [`AddressBook`] and the
//! [`SnapshotStore`] it came from, dispatches to the command layer and keeps track of whether
//! the book changed since it was last written.
//!
//! ## Session lifecycle
//!
//! 1. [`ContactsApi::open`] loads the snapshot. A missing snapshot starts an empty book.
//! 2. Mutating calls change the in-memory book only.
//! 3. [`ContactsApi::save`] writes a snapshot on request; [`ContactsApi::close`] writes one if
//!    anything changed.
//!
//! The API does no printing and no argument parsing. Dates are passed in so that callers
//! (and tests) decide what "today" is.

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::SnapshotStore;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub struct ContactsApi<S: SnapshotStore> {
    book: AddressBook,
    store: S,
    config_dir: PathBuf,
    dirty: bool,
}

impl<S: SnapshotStore> ContactsApi<S> {
    pub fn open(store: S, config_dir: PathBuf, page_size: usize) -> Result<Self> {
        let mut book = AddressBook::with_page_size(page_size);
        match book.load(&store) {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                tracing::info!(
                    location = %store.location().display(),
                    "no saved address book, starting empty"
                );
            }
            Err(e) => return Err(e),
        }
        Ok(Self {
            book,
            store,
            config_dir,
            dirty: false,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phones: &[String],
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        self.mutate(|book| commands::add::run(book, name, phones, birthday))
    }

    pub fn change_phone(&mut self, name: &str, old: Option<&str>, new: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::change::run(book, name, old, new))
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::remove::contact(book, name))
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.mutate(|book| commands::remove::phone(book, name, phone))
    }

    pub fn set_birthday(&mut self, name: &str, birthday: Option<&str>) -> Result<CmdResult> {
        self.mutate(|book| commands::birthday::set(book, name, birthday))
    }

    pub fn show_contact(&self, name: &str) -> Result<CmdResult> {
        commands::lookup::run(&self.book, name)
    }

    pub fn days_to_birthday(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::days(&self.book, name, today)
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, window: u32) -> Result<CmdResult> {
        commands::birthday::upcoming(&self.book, today, window)
    }

    pub fn list_contacts(&self, page: usize, page_size: Option<usize>) -> Result<CmdResult> {
        commands::list::run(&self.book, page, page_size)
    }

    pub fn search_contacts(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, term)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Write a snapshot now, whether or not anything changed.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.book.save(&self.store)?;
        self.dirty = false;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Address book saved ({} contacts)",
            self.book.count()
        )));
        Ok(result)
    }

    /// End the session, writing a snapshot if the book changed. Returns whether it wrote.
    pub fn close(self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.book.save(&self.store)?;
        Ok(true)
    }

    fn mutate<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut AddressBook) -> Result<CmdResult>,
    {
        let result = op(&mut self.book)?;
        self.dirty = true;
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{BirthdayEntry, CmdMessage, CmdResult, MessageLevel, PageInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::InMemoryStore;
    use crate::store::SnapshotStore;

    fn open(store: InMemoryStore) -> ContactsApi<InMemoryStore> {
        ContactsApi::open(store, std::env::temp_dir(), 5).unwrap()
    }

    #[test]
    fn opens_empty_when_nothing_saved() {
        let api = open(InMemoryStore::new());
        assert!(api.book().is_empty());
        assert!(!api.is_dirty());
    }

    #[test]
    fn open_fails_on_corrupt_snapshot() {
        let result = ContactsApi::open(InMemoryStore::with_content("{"), std::env::temp_dir(), 5);
        assert_eq!(result.err().unwrap().kind(), ErrorKind::CorruptData);
    }

    #[test]
    fn mutations_mark_dirty_and_reads_do_not() {
        let mut api = open(InMemoryStore::new());
        api.list_contacts(1, None).unwrap();
        assert!(!api.is_dirty());

        api.add_contact("Alice", &["123456".to_string()], None)
            .unwrap();
        assert!(api.is_dirty());

        api.save().unwrap();
        assert!(!api.is_dirty());
        assert!(api.store().read_snapshot().unwrap().contains("Alice"));
    }

    #[test]
    fn failed_mutation_leaves_clean_state() {
        let mut api = open(InMemoryStore::new());
        assert!(api.remove_contact("Ghost").is_err());
        assert!(!api.is_dirty());
    }

    #[test]
    fn close_writes_only_when_dirty() {
        let api = open(InMemoryStore::new());
        assert!(!api.close().unwrap());

        let mut api = open(InMemoryStore::new());
        api.add_contact("Alice", &[], Some("1990-01-01")).unwrap();
        assert!(api.close().unwrap());
    }
}

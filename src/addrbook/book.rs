//! # Address Book
//!
//! [`AddressBook`] is the keyed collection of [`Record`]s. Keys are contact names and are
//! unique; records keep the order in which their names were first added, which is the order
//! every listing and page uses.
//!
//! Adding a record under a name that already exists merges it into the stored record instead
//! of replacing it: missing phones are appended and a new birthday wins.
//!
//! Pages are computed on demand by [`AddressBook::paginate`], which returns a borrowed slice.
//! There is no cursor: asking for page 2 twice gives the same answer as long as the book has
//! not changed.

use crate::error::{BookError, Result};
use crate::record::Record;
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use std::collections::HashMap;

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
    page_size: usize,
}

/// One page of a listing together with where it sits in the whole.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// 1-based page number after clamping.
    pub number: usize,
    pub total_pages: usize,
    pub records: &'a [Record],
}

#[derive(Debug, Clone)]
pub struct UpcomingBirthday<'a> {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub days_away: i64,
    pub record: &'a Record,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

fn clamp_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        tracing::warn!("page size 0 requested, using 1");
    }
    page_size.max(1)
}

impl AddressBook {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            page_size: clamp_page_size(page_size),
        }
    }

    /// Build a book from records in order. Duplicate names are rejected.
    pub(crate) fn from_records(records: Vec<Record>, page_size: usize) -> Result<Self> {
        let mut book = Self::with_page_size(page_size);
        for record in records {
            if book.contains(record.name()) {
                return Err(BookError::CorruptData(format!(
                    "duplicate contact {:?}",
                    record.name()
                )));
            }
            book.insert(record);
        }
        Ok(book)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = clamp_page_size(page_size);
    }

    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name()) {
            Some(&pos) => {
                tracing::debug!(name = record.name(), "merging into existing contact");
                self.records[pos].merge(record);
            }
            None => self.insert(record),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Record> {
        self.index
            .get(name.trim())
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Record> {
        match self.index.get(name.trim()) {
            Some(&pos) => Ok(&mut self.records[pos]),
            None => Err(BookError::ContactNotFound(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name.trim())
    }

    pub fn remove(&mut self, name: &str) -> Result<Record> {
        let pos = self
            .index
            .remove(name.trim())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        let removed = self.records.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        self.records.len().div_ceil(page_size.max(1))
    }

    /// Records on the given 1-based page. Out of range pages clamp to the first or last page.
    pub fn paginate(&self, page: usize, page_size: Option<usize>) -> &[Record] {
        self.page(page, page_size).records
    }

    pub fn page(&self, page: usize, page_size: Option<usize>) -> Page<'_> {
        let size = clamp_page_size(page_size.unwrap_or(self.page_size));
        let total_pages = self.page_count(size);
        if total_pages == 0 {
            return Page {
                number: 1,
                total_pages: 0,
                records: &[],
            };
        }

        let number = page.clamp(1, total_pages);
        let start = (number - 1) * size;
        let end = (start + size).min(self.records.len());
        Page {
            number,
            total_pages,
            records: &self.records[start..end],
        }
    }

    /// Records matching `term` by name (case-insensitive) or phone digits.
    ///
    /// Exact name matches come first, then partial name matches, then phone matches.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let term_lower = term.to_lowercase();

        let mut matches: Vec<(u8, usize, &Record)> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(pos, record)| {
                let name_lower = record.name().to_lowercase();
                let rank = if name_lower == term_lower {
                    1
                } else if name_lower.contains(&term_lower) {
                    2
                } else if record.phones().any(|p| p.contains(term)) {
                    3
                } else {
                    return None;
                };
                Some((rank, pos, record))
            })
            .collect();

        matches.sort_by_key(|(rank, pos, _)| (*rank, *pos));
        matches.into_iter().map(|(_, _, record)| record).collect()
    }

    /// Records whose next birthday falls within `days` days of `today`, inclusive.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday<'_>> {
        let horizon = today + TimeDelta::days(i64::from(days));
        let mut upcoming: Vec<UpcomingBirthday<'_>> = self
            .records
            .iter()
            .filter_map(|record| {
                let date = record.next_birthday(today)?;
                (date <= horizon).then(|| UpcomingBirthday {
                    date,
                    weekday: date.weekday(),
                    days_away: (date - today).num_days(),
                    record,
                })
            })
            .collect();

        // Stable sort keeps insertion order for shared dates.
        upcoming.sort_by_key(|entry| entry.date);
        upcoming
    }

    fn insert(&mut self, record: Record) {
        self.index
            .insert(record.name().to_string(), self.records.len());
        self.records.push(record);
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A book holding `count` contacts named `Contact 01`, `Contact 02`, ...
    /// each with one distinct phone number.
    pub fn numbered_book(count: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 1..=count {
            let mut record = Record::new(&format!("Contact {:02}", i), None).unwrap();
            record.add_phone(&format!("{:06}", 100000 + i)).unwrap();
            book.add_record(record);
        }
        book
    }
}

use crate::book::Page;
use crate::config::BookConfig;
use crate::record::Record;
use chrono::{NaiveDate, Weekday};

pub mod add;
pub mod birthday;
pub mod change;
pub mod config;
pub mod list;
pub mod lookup;
pub mod remove;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Position of a listing within the whole book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub number: usize,
    pub total_pages: usize,
    pub total_records: usize,
}

impl PageInfo {
    pub fn from_page(page: &Page<'_>, total_records: usize) -> Self {
        Self {
            number: page.number,
            total_pages: page.total_pages,
            total_records,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BirthdayEntry {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub days_away: i64,
    pub record: Record,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub page: Option<PageInfo>,
    pub birthdays: Vec<BirthdayEntry>,
    pub days_to_birthday: Option<i64>,
    pub config: Option<BookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<BirthdayEntry>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_config(mut self, config: BookConfig) -> Self {
        self.config = Some(config);
        self
    }
}

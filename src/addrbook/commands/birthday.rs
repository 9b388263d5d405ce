use crate::book::AddressBook;
use crate::commands::{BirthdayEntry, CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

/// Set a contact's birthday, or clear it with `None`.
pub fn set(book: &mut AddressBook, name: &str, birthday: Option<&str>) -> Result<CmdResult> {
    let record = book.get_mut(name)?;
    record.set_birthday(birthday)?;

    let message = match record.birthday() {
        Some(date) => CmdMessage::success(format!(
            "Birthday set for {}: {}",
            record.name(),
            date.format("%Y-%m-%d")
        )),
        None => CmdMessage::success(format!("Birthday cleared for {}", record.name())),
    };

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(message);
    Ok(result)
}

/// Days from `today` until the contact's next birthday.
pub fn days(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = book.get(name)?;
    let mut result = CmdResult::default().with_listed_records(vec![record.clone()]);
    result.days_to_birthday = record.days_to_birthday(today);
    if result.days_to_birthday.is_none() {
        result.add_message(CmdMessage::info(format!(
            "Birthday is not set for {}",
            record.name()
        )));
    }
    Ok(result)
}

/// Contacts with a birthday in the next `window` days, soonest first.
pub fn upcoming(book: &AddressBook, today: NaiveDate, window: u32) -> Result<CmdResult> {
    let entries: Vec<BirthdayEntry> = book
        .upcoming_birthdays(today, window)
        .into_iter()
        .map(|u| BirthdayEntry {
            date: u.date,
            weekday: u.weekday,
            days_away: u.days_away,
            record: u.record.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days",
            window
        )));
    }
    Ok(result.with_birthdays(entries))
}

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

/// Replace one of a contact's phone numbers.
///
/// With no `old` number the contact's first phone is replaced.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    old: Option<&str>,
    new: &str,
) -> Result<CmdResult> {
    let record = book.get_mut(name)?;
    let old = match old {
        Some(old) => old.to_string(),
        None => record
            .phones()
            .next()
            .map(str::to_string)
            .ok_or_else(|| BookError::PhoneNotFound(format!("{} has no phone numbers", name)))?,
    };
    record.edit_phone(&old, new)?;

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Phone changed for {}: {} -> {}",
        record.name(),
        old,
        new.trim()
    )));
    Ok(result)
}

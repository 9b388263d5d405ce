use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Show one contact by exact name.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.get(name)?.clone();
    let mut result = CmdResult::default();
    if record.phone_count() == 0 {
        result.add_message(CmdMessage::info(format!(
            "{} has no phone numbers",
            record.name()
        )));
    }
    Ok(result.with_listed_records(vec![record]))
}

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::record::Record;

/// Add a contact, or merge phones and birthday into an existing one with the same name.
///
/// Every input is validated before the book is touched.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phones: &[String],
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let mut record = Record::new(name, birthday)?;
    for phone in phones {
        record.add_phone(phone)?;
    }

    let existed = book.contains(record.name());
    let key = record.name().to_string();
    book.add_record(record);
    let stored = book.get(&key)?.clone();

    let message = if existed {
        CmdMessage::success(format!("Contact updated: {}", stored.name()))
    } else {
        CmdMessage::success(format!("Contact added: {}", stored.name()))
    };

    let mut result = CmdResult::default().with_affected_records(vec![stored]);
    result.add_message(message);
    Ok(result)
}

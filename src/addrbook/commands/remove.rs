use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Remove a whole contact.
pub fn contact(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.remove(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact removed: {}",
        removed.name()
    )));
    Ok(result.with_affected_records(vec![removed]))
}

/// Remove one phone number from a contact. An absent number is reported, not an error.
pub fn phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.get_mut(name)?;
    let had_phone = record.has_phone(phone);
    record.remove_phone(phone);

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    if had_phone {
        result.add_message(CmdMessage::success(format!(
            "Phone {} removed from {}",
            phone.trim(),
            record.name()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} has no phone {}",
            record.name(),
            phone.trim()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::BookError;
    use crate::record::Record;

    fn sample() -> AddressBook {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("123456").unwrap();
        book.add_record(record);
        book
    }

    #[test]
    fn removes_contact() {
        let mut book = sample();
        contact(&mut book, "Alice").unwrap();
        assert!(book.is_empty());
        assert!(matches!(
            contact(&mut book, "Alice"),
            Err(BookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn removes_phone() {
        let mut book = sample();
        let result = phone(&mut book, "Alice", "123456").unwrap();
        assert_eq!(book.get("Alice").unwrap().phone_count(), 0);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn absent_phone_is_a_no_op() {
        let mut book = sample();
        let result = phone(&mut book, "Alice", "999999").unwrap();
        assert_eq!(book.get("Alice").unwrap().phone_count(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("has no phone 999999"));
    }
}

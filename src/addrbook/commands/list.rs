use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, PageInfo};
use crate::error::Result;

/// One page of contacts in insertion order. Out of range pages clamp.
pub fn run(book: &AddressBook, page: usize, page_size: Option<usize>) -> Result<CmdResult> {
    let page = book.page(page, page_size);
    let info = PageInfo::from_page(&page, book.count());

    let mut result = CmdResult::default()
        .with_listed_records(page.records.to_vec())
        .with_page(info);
    if book.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result)
}

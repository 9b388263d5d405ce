use addrbook::api::{BirthdayEntry, CmdMessage, MessageLevel, PageInfo};
use addrbook::Record;
use chrono::Weekday;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const PHONES_WIDTH: usize = 40;
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_records(records: &[Record]) {
    for record in records {
        let name = truncate_to_width(record.name(), NAME_WIDTH);
        let name_pad = NAME_WIDTH.saturating_sub(name.width());

        let phones = record.phones().collect::<Vec<_>>().join(", ");
        let phones = truncate_to_width(&phones, PHONES_WIDTH);
        let phones_pad = PHONES_WIDTH.saturating_sub(phones.width());

        let birthday = record
            .birthday()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        println!(
            "{}{}  {}{}  {}",
            name.bold(),
            " ".repeat(name_pad),
            phones,
            " ".repeat(phones_pad),
            birthday.dimmed()
        );
    }
}

pub(crate) fn print_page_footer(page: &PageInfo) {
    if page.total_pages == 0 {
        return;
    }
    println!(
        "{}",
        format!(
            "Page {}/{} ({} contacts)",
            page.number, page.total_pages, page.total_records
        )
        .dimmed()
    );
}

pub(crate) fn print_days(name: &str, days: i64) {
    match days {
        0 => println!("{}'s birthday is {}", name, "today".green().bold()),
        1 => println!("{}'s birthday is tomorrow", name),
        n => println!("{} days until {}'s birthday", n.to_string().yellow(), name),
    }
}

/// Upcoming birthdays grouped by weekday, Monday first.
pub(crate) fn print_birthdays(entries: &[BirthdayEntry]) {
    for day in WEEK {
        let names: Vec<&str> = entries
            .iter()
            .filter(|e| e.weekday == day)
            .map(|e| e.record.name())
            .collect();
        if names.is_empty() {
            continue;
        }
        println!("{}: {}", weekday_name(day).bold(), names.join(", "));
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

use crate::error::{BookError, Result};
use crate::field::{Birthday, FieldRule, Name, Phone, PhoneRule};
use chrono::{Datelike, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One contact: a name, its phone numbers in the order they were added, and an optional
/// birthday.
///
/// The name is the contact's identity inside an [`AddressBook`](crate::book::AddressBook) and
/// cannot be changed once the record exists. Renaming means removing and re-adding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default, deserialize_with = "deserialize_phones")]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Birthday,
}

/// Phones in a snapshot must each be valid text and distinct; `null` entries are rejected.
fn deserialize_phones<'de, D>(deserializer: D) -> std::result::Result<Vec<Phone>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut phones: Vec<Phone> = Vec::with_capacity(raw.len());
    for text in raw {
        let phone = Phone::new(&text).map_err(D::Error::custom)?;
        if phones.contains(&phone) {
            return Err(D::Error::custom(format!("duplicate phone {}", phone)));
        }
        phones.push(phone);
    }
    Ok(phones)
}

impl Record {
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self> {
        let name = Name::new(name)?;
        let birthday = match birthday {
            Some(raw) => Birthday::new(raw)?,
            None => Birthday::empty(),
        };
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &str {
        self.name.get().map(String::as_str).unwrap_or_default()
    }

    pub fn phones(&self) -> impl Iterator<Item = &str> + '_ {
        self.phones
            .iter()
            .filter_map(|p| p.get().map(String::as_str))
    }

    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.position_of(phone).is_some()
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday.get().copied()
    }

    /// Append a phone number. Adding a number the record already has is a no-op.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::new(raw)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Remove every entry equal to `raw`. Removing an absent number does nothing.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| !Self::matches(p, raw));
    }

    /// Replace `old` with `new` in place, keeping its position in the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        let replacement = Phone::new(new)?;
        let duplicate = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && *p == replacement);
        if duplicate {
            // The new number is already on the record elsewhere; drop the old entry instead.
            self.phones.remove(pos);
        } else {
            self.phones[pos] = replacement;
        }
        Ok(())
    }

    /// Set the birthday from `YYYY-MM-DD` text, or clear it with `None`.
    pub fn set_birthday(&mut self, raw: Option<&str>) -> Result<()> {
        match raw {
            Some(raw) => self.birthday.set(raw),
            None => {
                self.birthday.clear();
                Ok(())
            }
        }
    }

    /// The first occurrence of the birthday on or after `today`.
    ///
    /// Feb 29 birthdays are observed on Feb 28 in years without a leap day.
    pub fn next_birthday(&self, today: NaiveDate) -> Option<NaiveDate> {
        let birthday = self.birthday()?;
        let this_year = occurrence(birthday, today.year())?;
        if this_year < today {
            occurrence(birthday, today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.next_birthday(today)
            .map(|next| (next - today).num_days())
    }

    /// Fold another record for the same contact into this one.
    ///
    /// Phones are appended when missing. A birthday on `other` replaces ours.
    pub(crate) fn merge(&mut self, other: Record) {
        for phone in other.phones {
            if !self.phones.contains(&phone) {
                self.phones.push(phone);
            }
        }
        if other.birthday.is_set() {
            self.birthday = other.birthday;
        }
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| Self::matches(p, raw))
    }

    fn matches(phone: &Phone, raw: &str) -> bool {
        // Compare against the validated form so surrounding whitespace is ignored.
        match PhoneRule::parse(raw) {
            Ok(value) => phone.get() == Some(&value),
            Err(_) => false,
        }
    }
}

fn occurrence(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn phones(record: &Record) -> Vec<&str> {
        record.phones().collect()
    }

    #[test]
    fn new_validates_name_and_birthday() {
        assert!(matches!(
            Record::new("12345", None),
            Err(BookError::InvalidName(_))
        ));
        assert_eq!(
            Record::new("Bob", Some("1990-02-30")).unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );

        let record = Record::new("Bob", Some("1990-05-15")).unwrap();
        assert_eq!(record.name(), "Bob");
        assert_eq!(record.birthday(), Some(date("1990-05-15")));
        assert_eq!(record.phone_count(), 0);
    }

    #[test]
    fn add_phone_is_idempotent() {
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("123456").unwrap();
        record.add_phone("123456").unwrap();
        assert_eq!(phones(&record), vec!["123456"]);
    }

    #[test]
    fn add_phone_rejects_malformed_without_mutation() {
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("123456").unwrap();
        assert!(record.add_phone("12-34").is_err());
        assert_eq!(phones(&record), vec!["123456"]);
    }

    #[test]
    fn remove_phone_ignores_absent_numbers() {
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("123456").unwrap();
        record.add_phone("654321").unwrap();
        record.remove_phone("111111");
        record.remove_phone("garbage");
        assert_eq!(record.phone_count(), 2);
        record.remove_phone("123456");
        assert_eq!(phones(&record), vec!["654321"]);
    }

    #[test]
    fn edit_phone_keeps_position() {
        let mut record = Record::new("Alice", None).unwrap();
        for p in ["111111", "222222", "333333"] {
            record.add_phone(p).unwrap();
        }
        record.edit_phone("222222", "999999").unwrap();
        assert_eq!(phones(&record), vec!["111111", "999999", "333333"]);
    }

    #[test]
    fn edit_missing_phone_is_not_found() {
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("111111").unwrap();
        let err = record.edit_phone("222222", "999999").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
        assert_eq!(phones(&record), vec!["111111"]);
    }

    #[test]
    fn edit_to_malformed_keeps_old_phone() {
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("111111").unwrap();
        let err = record.edit_phone("111111", "abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(phones(&record), vec!["111111"]);
    }

    #[test]
    fn edit_onto_existing_number_does_not_duplicate() {
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("111111").unwrap();
        record.add_phone("222222").unwrap();
        record.edit_phone("111111", "222222").unwrap();
        assert_eq!(phones(&record), vec!["222222"]);
    }

    #[test]
    fn edit_to_same_number_is_a_no_op() {
        let mut record = Record::new("Alice", None).unwrap();
        record.add_phone("111111").unwrap();
        record.edit_phone("111111", "111111").unwrap();
        assert_eq!(phones(&record), vec!["111111"]);
    }

    #[test]
    fn set_birthday_validates_and_clears() {
        let mut record = Record::new("Alice", Some("2000-01-01")).unwrap();
        assert!(record.set_birthday(Some("2000-00-01")).is_err());
        assert_eq!(record.birthday(), Some(date("2000-01-01")));
        record.set_birthday(None).unwrap();
        assert_eq!(record.birthday(), None);
        assert_eq!(record.days_to_birthday(date("2024-01-01")), None);
    }

    #[test]
    fn days_to_birthday_rolls_to_next_year_once_passed() {
        let record = Record::new("Alice", Some("2024-01-01")).unwrap();
        let today = date("2024-06-15");
        assert_eq!(
            record.days_to_birthday(today),
            Some((date("2025-01-01") - today).num_days())
        );
        assert_eq!(record.days_to_birthday(date("2023-12-01")), Some(31));
    }

    #[test]
    fn birthday_today_is_zero_days_away() {
        let record = Record::new("Alice", Some("1990-06-15")).unwrap();
        assert_eq!(record.days_to_birthday(date("2024-06-15")), Some(0));
    }

    #[test]
    fn leap_day_birthday_observed_on_feb_28() {
        let record = Record::new("Leap", Some("2000-02-29")).unwrap();
        assert_eq!(
            record.next_birthday(date("2023-01-10")),
            Some(date("2023-02-28"))
        );
        assert_eq!(
            record.next_birthday(date("2024-01-10")),
            Some(date("2024-02-29"))
        );
        assert_eq!(
            record.next_birthday(date("2023-03-01")),
            Some(date("2024-02-29"))
        );
    }

    #[test]
    fn merge_appends_missing_phones_and_takes_birthday() {
        let mut a = Record::new("Alice", None).unwrap();
        a.add_phone("123456").unwrap();
        let mut b = Record::new("Alice", Some("1991-03-03")).unwrap();
        b.add_phone("123456").unwrap();
        b.add_phone("654321").unwrap();

        a.merge(b);
        assert_eq!(phones(&a), vec!["123456", "654321"]);
        assert_eq!(a.birthday(), Some(date("1991-03-03")));

        a.merge(Record::new("Alice", None).unwrap());
        assert_eq!(a.birthday(), Some(date("1991-03-03")));
    }

    #[test]
    fn deserialize_rejects_null_and_duplicate_phones() {
        let ok: Record =
            serde_json::from_str(r#"{"name": "Al", "phones": ["123456", "654321"]}"#).unwrap();
        assert_eq!(ok.phone_count(), 2);
        assert_eq!(phones(&ok), vec!["123456", "654321"]);

        for bad in [
            r#"{"name": "Al", "phones": [null, "123456"]}"#,
            r#"{"name": "Al", "phones": ["123456", "123456"]}"#,
            r#"{"name": "Al", "phones": ["12345"]}"#,
        ] {
            assert!(serde_json::from_str::<Record>(bad).is_err(), "{bad}");
        }
    }
}

//! # Validated Fields
//!
//! Every scalar a contact carries (name, phone, birthday) lives in a [`Field`]. A field is a
//! generic holder parameterized by a [`FieldRule`], which supplies the parser that turns raw
//! text into the stored value and the canonical text form used for display and snapshots.
//!
//! The rule runs on **every** assignment, not only at construction. A failed [`Field::set`]
//! leaves the previous value untouched, so a field is never observed half-updated.
//!
//! ## Rules
//!
//! - [`NameRule`]: non-empty after trimming, and not made only of digits.
//! - [`PhoneRule`]: ASCII digits only, exactly [`PHONE_DIGITS`] of them.
//! - [`BirthdayRule`]: a real calendar date written as `YYYY-MM-DD`.

use crate::error::{BookError, Result};
use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 6;

/// Text format of birthdays, both on input and in snapshots.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Validation and rendering policy for one kind of field.
pub trait FieldRule {
    /// Human readable field name, used in error messages.
    const LABEL: &'static str;

    type Value: Clone + PartialEq + fmt::Debug;

    fn parse(raw: &str) -> Result<Self::Value>;

    fn render(value: &Self::Value) -> String;
}

/// A scalar that only ever holds values accepted by its rule `R`.
pub struct Field<R: FieldRule> {
    value: Option<R::Value>,
    rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    pub fn empty() -> Self {
        Self {
            value: None,
            rule: PhantomData,
        }
    }

    pub fn new(raw: &str) -> Result<Self> {
        let mut field = Self::empty();
        field.set(raw)?;
        Ok(field)
    }

    /// Validate `raw` and store it. On failure the current value is kept.
    pub fn set(&mut self, raw: &str) -> Result<()> {
        let parsed = R::parse(raw)?;
        self.value = Some(parsed);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn get(&self) -> Option<&R::Value> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl<R: FieldRule> Default for Field<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: FieldRule> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R: FieldRule> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(R::LABEL).field(&self.value).finish()
    }
}

/// Canonical text of the value, or an empty string when unset.
impl<R: FieldRule> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.write_str(&R::render(value)),
            None => Ok(()),
        }
    }
}

// Snapshots hold the canonical text and go back through the rule on load.
impl<R: FieldRule> Serialize for Field<R> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.value {
            Some(value) => serializer.serialize_some(&R::render(value)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => Field::new(&raw).map_err(D::Error::custom),
            None => Ok(Field::empty()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NameRule;

impl FieldRule for NameRule {
    const LABEL: &'static str = "name";
    type Value = String;

    fn parse(raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(BookError::InvalidName(raw.to_string()));
        }
        Ok(trimmed.to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    const LABEL: &'static str = "phone";
    type Value = String;

    fn parse(raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.len() != PHONE_DIGITS || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(BookError::InvalidFormat {
                field: Self::LABEL,
                value: raw.to_string(),
            });
        }
        Ok(trimmed.to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    const LABEL: &'static str = "birthday";
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), BIRTHDAY_FORMAT).map_err(|_| {
            BookError::InvalidFormat {
                field: Self::LABEL,
                value: raw.to_string(),
            }
        })
    }

    fn render(value: &NaiveDate) -> String {
        value.format(BIRTHDAY_FORMAT).to_string()
    }
}

pub type Name = Field<NameRule>;
pub type Phone = Field<PhoneRule>;
pub type Birthday = Field<BirthdayRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn name_rejects_empty_and_numeric() {
        assert!(matches!(Name::new(""), Err(BookError::InvalidName(_))));
        assert!(matches!(Name::new("   "), Err(BookError::InvalidName(_))));
        assert!(matches!(Name::new("123456"), Err(BookError::InvalidName(_))));
        assert_eq!(Name::new(" Alice ").unwrap().to_string(), "Alice");
        assert_eq!(Name::new("R2D2").unwrap().to_string(), "R2D2");
    }

    #[test]
    fn phone_requires_exact_digit_count() {
        assert!(Phone::new("123456").is_ok());
        for bad in ["", "12345", "1234567", "12a456", "+12345"] {
            let err = Phone::new(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{bad:?}");
        }
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        assert!(Birthday::new("2024-02-29").is_ok());
        assert!(Birthday::new("2023-02-29").is_err());
        assert!(Birthday::new("2023-13-01").is_err());
        assert!(Birthday::new("01.02.2023").is_err());
    }

    #[test]
    fn failed_set_keeps_previous_value() {
        let mut phone = Phone::new("123456").unwrap();
        assert!(phone.set("nope").is_err());
        assert_eq!(phone.get().map(String::as_str), Some("123456"));

        let mut birthday = Birthday::new("1990-05-15").unwrap();
        assert!(birthday.set("1990-05-32").is_err());
        assert_eq!(birthday.to_string(), "1990-05-15");
    }

    #[test]
    fn set_revalidates_on_mutation() {
        let mut phone = Phone::empty();
        assert!(!phone.is_set());
        phone.set("654321").unwrap();
        assert!(phone.set("65432").is_err());
        assert_eq!(phone.to_string(), "654321");
    }

    #[test]
    fn unset_field_displays_empty() {
        let birthday = Birthday::empty();
        assert_eq!(birthday.to_string(), "");
        assert_eq!(birthday.get(), None);
    }

    #[test]
    fn serde_goes_through_the_rule() {
        let birthday = Birthday::new("2000-01-31").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"2000-01-31\"");
        assert_eq!(serde_json::from_str::<Birthday>(&json).unwrap(), birthday);

        assert_eq!(serde_json::to_string(&Birthday::empty()).unwrap(), "null");
        assert!(!serde_json::from_str::<Birthday>("null").unwrap().is_set());
        assert!(serde_json::from_str::<Phone>("\"12\"").is_err());
    }
}

//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format used both to parse and to render birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded fields, so the shape is checked separately.
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date shape regex")
});

/// A contact's birthday as a pure calendar date.
///
/// Parsed from and rendered to `DD.MM.YYYY` with a zero-padded day and
/// month and a four-digit year. No time of day or timezone is kept.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::parse("07.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "07.03.1990");
/// assert!(Birthday::parse("7.3.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input is not padded to
    /// the exact shape, or names a date that does not exist (31.04, 29.02 of
    /// a common year, month 13, ...).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for Birthday {
    type Error = ValidationError;

    /// Accepts only dates whose year renders as four digits, so the result
    /// always parses back from its `DD.MM.YYYY` form.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if !(0..=9999).contains(&date.year()) {
            return Err(ValidationError::InvalidDate(
                date.format(DATE_FORMAT).to_string(),
            ));
        }
        Ok(Self(date))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

//! Date arithmetic behind `AddressBook::get_upcoming_birthdays`.

use crate::domain::birthday::DATE_FORMAT;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Window used when the caller does not pick one.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One entry of the upcoming-birthday list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Date to congratulate on, as `DD.MM.YYYY`, already moved off weekends
    pub birthday: String,
}

/// Move a Saturday or Sunday to the following Monday.
///
/// Weekdays are returned unchanged.
pub fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Render a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Month and day of `birthday` placed in `year`.
///
/// 29 February falls back to 28 February in common years.
fn in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday.with_year(year).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The first occurrence of `birthday`'s month and day on or after `today`.
///
/// An occurrence earlier than `today` in the current year is pushed to next
/// year. Returns `None` only when the projected year is outside chrono's
/// representable range.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = in_year(birthday, today.year())?;
    if this_year < today {
        in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// The date to congratulate on if the next occurrence of `birthday` is at
/// most `window_days` days after `today`, shifted off weekends.
///
/// The window is checked against the raw occurrence, before shifting, and
/// both ends are inclusive.
pub fn greeting_date(birthday: NaiveDate, today: NaiveDate, window_days: u32) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let delta = (occurrence - today).num_days();

    if (0..=i64::from(window_days)).contains(&delta) {
        Some(shift_weekend_to_monday(occurrence))
    } else {
        None
    }
}

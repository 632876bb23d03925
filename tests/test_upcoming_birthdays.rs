//! Integration tests for the upcoming-birthday query.

use address_book::{AddressBook, Contact, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use chrono::NaiveDate;

fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn book_with(birthdays: &[(&str, &str)]) -> AddressBook {
    birthdays
        .iter()
        .map(|(name, birthday)| {
            let mut contact = Contact::new(*name);
            contact.add_birthday(birthday).unwrap();
            contact
        })
        .collect()
}

fn sorted(mut upcoming: Vec<UpcomingBirthday>) -> Vec<(String, String)> {
    upcoming.sort_by(|a, b| a.name.cmp(&b.name));
    upcoming
        .into_iter()
        .map(|u| (u.name, u.birthday))
        .collect()
}

fn pair(name: &str, birthday: &str) -> (String, String) {
    (name.to_string(), birthday.to_string())
}

/// Week starting Monday 10.06.2024.
#[test]
fn test_week_from_monday() {
    let book = book_with(&[
        ("Monday", "10.06.1990"),
        ("Wednesday", "12.06.1985"),
        ("Saturday", "15.06.2024"),
        ("Sunday", "16.06.2000"),
        ("NextMonday", "17.06.1970"),
        ("TooFar", "20.06.2024"),
        ("Passed", "09.06.1990"),
    ]);

    let upcoming = sorted(book.get_upcoming_birthdays(date(10, 6, 2024), DEFAULT_WINDOW_DAYS));
    assert_eq!(
        upcoming,
        vec![
            pair("Monday", "10.06.2024"),
            pair("NextMonday", "17.06.2024"),
            pair("Saturday", "17.06.2024"),
            pair("Sunday", "17.06.2024"),
            pair("Wednesday", "12.06.2024"),
        ]
    );
}

/// A birthday that already passed is found through next year's occurrence.
#[test]
fn test_year_boundary() {
    // 27.12.2024 is a Friday.
    let book = book_with(&[
        ("NewYear", "01.01.1995"),
        ("Passed", "20.12.1995"),
        ("Friday", "03.01.2000"),
        ("TooFar", "04.01.2000"),
    ]);

    let upcoming = sorted(book.get_upcoming_birthdays(date(27, 12, 2024), 7));
    assert_eq!(
        upcoming,
        vec![pair("Friday", "03.01.2025"), pair("NewYear", "01.01.2025")]
    );
}

/// Widening the window picks up later birthdays.
#[test]
fn test_custom_window() {
    let book = book_with(&[("Soon", "12.06.1990"), ("Later", "20.06.1990")]);
    let today = date(10, 6, 2024);

    assert_eq!(book.get_upcoming_birthdays(today, 7).len(), 1);
    assert_eq!(
        sorted(book.get_upcoming_birthdays(today, 10)),
        vec![pair("Later", "20.06.2024"), pair("Soon", "12.06.2024")]
    );
    assert!(book.get_upcoming_birthdays(today, 0).is_empty());
}

/// Leap-day birthdays are celebrated on 28 February in common years.
#[test]
fn test_leap_day_birthday() {
    let book = book_with(&[("Leap", "29.02.2000")]);

    // 28.02.2025 is a Friday.
    let upcoming = book.get_upcoming_birthdays(date(25, 2, 2025), 7);
    assert_eq!(sorted(upcoming), vec![pair("Leap", "28.02.2025")]);

    // 29.02.2024 is a Thursday.
    let upcoming = book.get_upcoming_birthdays(date(25, 2, 2024), 7);
    assert_eq!(sorted(upcoming), vec![pair("Leap", "29.02.2024")]);
}

/// The list serializes as an array of `{name, birthday}` objects.
#[test]
fn test_upcoming_serializes_to_json() {
    let book = book_with(&[("Saturday", "15.06.2024")]);
    let upcoming = book.get_upcoming_birthdays(date(10, 6, 2024), 7);

    let json = serde_json::to_value(&upcoming).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "name": "Saturday", "birthday": "17.06.2024" }])
    );
}

/// Relative to the real calendar, a birthday on the day the fixture was
/// built is always found within a full-year window, even if the clock passes
/// midnight before the query runs.
#[test]
fn test_upcoming_today_includes_today() {
    let today = chrono::Local::now().date_naive();
    let mut contact = Contact::new("Today");
    contact
        .add_birthday(&today.format("%d.%m.%Y").to_string())
        .unwrap();

    let mut book = AddressBook::new();
    book.add_record(contact);

    let upcoming = book.upcoming_birthdays_today(366);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Today");

    // Same fixture against a fixed day, with the default window.
    let upcoming = book.get_upcoming_birthdays(today, DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Today");
}

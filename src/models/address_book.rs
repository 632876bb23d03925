//! AddressBook: contacts keyed by name.

use crate::birthdays::{format_date, greeting_date, UpcomingBirthday};
use crate::models::Contact;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::fmt;

/// Contacts keyed by name.
///
/// The key of every entry is the name of the contact stored under it.
/// Inserting a contact whose name is already present replaces the old entry.
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `contact` under its name, replacing any contact with that name.
    pub fn add_record(&mut self, contact: Contact) {
        let name = contact.name().as_str().to_string();
        if self.records.insert(name.clone(), contact).is_some() {
            tracing::debug!(contact = %name, "Record replaced");
        } else {
            tracing::debug!(contact = %name, "Record added");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.records.get(name)
    }

    /// Mutable lookup for editing a stored contact in place.
    ///
    /// The contact's name cannot change through this reference, so the key
    /// stays in sync.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.records.get_mut(name)
    }

    /// Remove the contact filed under `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            tracing::debug!(contact = %name, "Record deleted");
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over stored contacts in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.records.values()
    }

    /// Render every contact on its own line, or `AddressBook is empty.`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Contacts whose next birthday is within `window_days` days of `today`.
    ///
    /// Both ends of the window are inclusive. A birthday already past this
    /// year is considered at its occurrence next year. Occurrences on a
    /// Saturday or Sunday are reported on the following Monday. Contacts
    /// without a birthday are skipped. Order follows iteration order.
    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;
                let date = greeting_date(birthday.date(), today, window_days);
                tracing::trace!(
                    contact = %contact.name(),
                    birthday = %birthday,
                    included = date.is_some(),
                    "Checked birthday"
                );
                date.map(|date| UpcomingBirthday {
                    name: contact.name().as_str().to_string(),
                    birthday: format_date(date),
                })
            })
            .collect();

        tracing::info!(
            today = %format_date(today),
            window_days,
            count = upcoming.len(),
            "Upcoming birthdays computed"
        );
        upcoming
    }

    /// [`get_upcoming_birthdays`](Self::get_upcoming_birthdays) relative to
    /// the local calendar date.
    pub fn upcoming_birthdays_today(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays(Local::now().date_naive(), window_days)
    }
}

impl Extend<Contact> for AddressBook {
    fn extend<T: IntoIterator<Item = Contact>>(&mut self, iter: T) {
        for contact in iter {
            self.add_record(contact);
        }
    }
}

impl FromIterator<Contact> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "AddressBook is empty.");
        }

        let lines = self
            .records
            .values()
            .map(Contact::render)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}

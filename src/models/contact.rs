//! Contact model: one person's name, phone numbers and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Every phone number and the birthday went through their validating
/// constructors, so a `Contact` never holds malformed data. Phones keep
/// insertion order and may repeat. The birthday can be set once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` if `phone` is not ten digits; the
    /// phone list is left untouched.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if no phone on the contact
    /// matches.
    pub fn remove_phone(&mut self, phone: &str) -> ContactResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        tracing::debug!(contact = %self.name, phone, "Phone removed");
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if `old` is not on the contact,
    /// otherwise `ContactError::Validation` if `new` is not ten digits. The
    /// phone list is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self.position_of(old)?;
        let replacement = PhoneNumber::new(new)?;
        tracing::debug!(contact = %self.name, old, new, "Phone edited");
        self.phones[index] = replacement;
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Parse `birthday` as `DD.MM.YYYY` and store it.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::BirthdayAlreadySet` if a birthday is already
    /// stored (checked before parsing), or `ContactError::Validation` if the
    /// date is malformed.
    pub fn add_birthday(&mut self, birthday: &str) -> ContactResult<()> {
        if self.birthday.is_some() {
            return Err(ContactError::BirthdayAlreadySet {
                name: self.name.to_string(),
            });
        }

        let birthday = Birthday::parse(birthday)?;
        tracing::debug!(contact = %self.name, birthday = %birthday, "Birthday set");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Render as `Contact name: <name>, phones: <p1>, <p2>[, birthday: <DD.MM.YYYY>]`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, phone: &str) -> ContactResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| ContactError::PhoneNotFound {
                phone: phone.to_string(),
            })
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

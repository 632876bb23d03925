//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields stored on a
//! contact: its name, phone numbers and birthday. Phone numbers and
//! birthdays are validated at construction time so that invalid data can
//! never be represented in a [`Contact`](crate::models::Contact).

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;

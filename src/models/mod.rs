//! Data models for the address book.
//!
//! This module contains the contact record and the keyed collection that
//! stores contacts by name.

pub mod address_book;
pub mod contact;

pub use address_book::AddressBook;
pub use contact::Contact;

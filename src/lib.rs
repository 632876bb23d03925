//! Address Book - an in-memory contact book with validated fields.
//!
//! Contacts hold a name, any number of ten-digit phone numbers and at most
//! one birthday. The [`AddressBook`] keys contacts by name and answers which
//! birthdays fall within the next few days, moving weekend dates to Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and the address book
//! - **birthdays**: Next-occurrence, window and weekend-shift date logic
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Contact};
//! use chrono::NaiveDate;
//!
//! let mut john = Contact::new("John");
//! john.add_phone("1234567890").unwrap();
//! john.add_birthday("15.06.1990").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let upcoming = book.get_upcoming_birthdays(today, 7);
//! assert_eq!(upcoming[0].birthday, "17.06.2024");
//! ```

pub mod birthdays;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use birthdays::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{AddressBook, Contact};

//! Upcoming-birthday windowing.
//!
//! Projects a birthday onto the next calendar occurrence, decides whether it
//! falls inside a window of days, and moves weekend occurrences to the
//! following Monday.

pub mod window;

pub use window::{
    format_date, greeting_date, next_occurrence, shift_weekend_to_monday, UpcomingBirthday,
    DEFAULT_WINDOW_DAYS,
};

//! # tr-time
//!
//! Date, weekday, and rental holiday calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Holiday calendar trait and the US rental calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, UsRentalCalendar};
pub use date::Date;
pub use weekday::Weekday;

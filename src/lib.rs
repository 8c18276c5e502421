//! Membership predicates for recurring calendar dates.
//!
//! A rule is built once and then asked whether a given date belongs to it.
//! Nothing here enumerates occurrences.

mod calendar_day;
pub mod daily;
mod once;
mod rrule;
mod set;
#[cfg(test)]
mod test_helpers;
pub mod weekly;

pub use calendar_day::CalendarDay;
pub use daily::Daily;
pub use once::Once;
pub use rrule::RRule;
pub use set::Set;
pub use weekly::{next_occurrence, Days, Weekly};

pub use chrono::Weekday;

use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Frequency {
    Once,
    Daily,
    Weekly,
}

/// Reasons a rule can not be constructed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("interval must be at least 1, got {interval}")]
    InvalidStride { interval: i64 },

    #[error("until ({until}) must be after dtstart ({dtstart})")]
    InvalidRange { dtstart: NaiveDate, until: NaiveDate },

    #[error("weekly recurrence needs at least one weekday")]
    EmptyWeekdaySet,

    /// Date arithmetic went past what chrono can represent.
    #[error("date arithmetic from {dtstart} is out of range")]
    OutOfRange { dtstart: NaiveDate },
}

/// Resolves an optional interval, defaulting to 1.
fn checked_interval(interval: Option<i64>) -> Result<i64, Error> {
    match interval.unwrap_or(1) {
        interval if interval >= 1 => Ok(interval),
        interval => Err(Error::InvalidStride { interval }),
    }
}

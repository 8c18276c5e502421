use chrono::{Duration, NaiveDate};

pub const ONE_DAY: Duration = Duration::days(1);
pub const ONE_WEEK: Duration = Duration::weeks(1);

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("bug: invalid fixture date")
}

/// 2022-04-01
pub fn a_friday() -> NaiveDate {
    ymd(2022, 4, 1)
}

use crate::CalendarDay;
use chrono::NaiveDate;

/// Active on exactly one calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Once {
    date: NaiveDate,
}

impl Once {
    pub fn new(date: impl CalendarDay) -> Self {
        let date = date.calendar_day();
        tracing::trace!(%date, "built once rule");
        Once { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_active(&self, date: impl CalendarDay) -> bool {
        date.calendar_day() == self.date
    }
}

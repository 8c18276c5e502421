use crate::{checked_interval, CalendarDay, Error};
use chrono::{Datelike as _, Duration, Months, NaiveDate};

/// Active every `interval` days from `dtstart`, optionally up to and
/// including `until`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Daily {
    interval: i64,
    dtstart: NaiveDate,
    until: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub interval: Option<i64>,
    pub until: Option<NaiveDate>,
}

impl Daily {
    pub fn new(dtstart: impl CalendarDay, options: Options) -> Result<Self, Error> {
        let dtstart = dtstart.calendar_day();
        let interval = checked_interval(options.interval)?;

        if let Some(until) = options.until {
            if until <= dtstart {
                return Err(Error::InvalidRange { dtstart, until });
            }
        }

        tracing::trace!(%dtstart, interval, until = ?options.until, "built daily rule");

        Ok(Daily {
            interval,
            dtstart,
            until: options.until,
        })
    }

    /// Every `interval` days for `weeks` weeks, the last day included.
    pub fn for_weeks(dtstart: impl CalendarDay, interval: i64, weeks: i32) -> Result<Self, Error> {
        let dtstart = dtstart.calendar_day();
        let until = Duration::try_weeks(weeks.into()).and_then(|w| dtstart.checked_add_signed(w));
        Self::bounded(dtstart, interval, until)
    }

    /// Every `interval` days for `months` calendar months.
    ///
    /// Days past the end of the last month roll over into the next one, so
    /// a rule from January 31st for one month ends on March 3rd (2nd in leap
    /// years).
    pub fn for_months(dtstart: impl CalendarDay, interval: i64, months: i32) -> Result<Self, Error> {
        let dtstart = dtstart.calendar_day();
        Self::bounded(dtstart, interval, add_months(dtstart, months))
    }

    pub fn for_years(dtstart: impl CalendarDay, interval: i64, years: i32) -> Result<Self, Error> {
        let dtstart = dtstart.calendar_day();
        let until = years
            .checked_mul(12)
            .and_then(|months| add_months(dtstart, months));
        Self::bounded(dtstart, interval, until)
    }

    fn bounded(dtstart: NaiveDate, interval: i64, until: Option<NaiveDate>) -> Result<Self, Error> {
        let interval = checked_interval(Some(interval))?;
        let until = until.ok_or(Error::OutOfRange { dtstart })?;

        Daily::new(
            dtstart,
            Options {
                interval: Some(interval),
                until: Some(until),
            },
        )
    }

    pub fn dtstart(&self) -> NaiveDate {
        self.dtstart
    }

    pub fn interval(&self) -> i64 {
        self.interval
    }

    pub fn until(&self) -> Option<NaiveDate> {
        self.until
    }

    pub fn is_active(&self, date: impl CalendarDay) -> bool {
        let date = date.calendar_day();

        if date < self.dtstart {
            return false;
        }

        if matches!(self.until, Some(until) if date > until) {
            return false;
        }

        (date - self.dtstart).num_days() % self.interval == 0
    }
}

/// Shifts by whole months from the first of the month and adds the day
/// back, letting it overflow into the following month.
fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    let delta = Months::new(months.unsigned_abs());
    let first = if months < 0 {
        first.checked_sub_months(delta)
    } else {
        first.checked_add_months(delta)
    }?;

    first.checked_add_signed(Duration::days(i64::from(date.day0())))
}

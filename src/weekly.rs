use crate::{checked_interval, CalendarDay, Error};
use chrono::{Datelike as _, Duration, NaiveDate, Weekday};
use std::iter::FromIterator;

const DAYS_IN_WEEK: i64 = 7;

static WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A set of weekdays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Days(u8);

impl Days {
    pub const EMPTY: Days = Days(0);
    pub const ALL: Days = Days(0b111_1111);
    /// Monday through Friday
    pub const WEEKDAYS: Days = Days(0b011_1110);
    pub const WEEKENDS: Days = Days(0b100_0001);

    pub fn single(weekday: Weekday) -> Self {
        Days::EMPTY.with(weekday)
    }

    pub fn with(self, weekday: Weekday) -> Self {
        Days(self.0 | bit(weekday))
    }

    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & bit(weekday) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members from Sunday to Saturday.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEK.iter().copied().filter(move |&d| self.contains(d))
    }
}

fn bit(weekday: Weekday) -> u8 {
    1 << weekday.num_days_from_sunday()
}

impl FromIterator<Weekday> for Days {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Days::EMPTY, Days::with)
    }
}

/// The first `weekday` on or after `from`.
///
/// Returns `from` itself when it already falls on `weekday`, otherwise a
/// date one to six days later. `None` only if that date is past the last
/// one chrono can represent.
pub fn next_occurrence(weekday: Weekday, from: NaiveDate) -> Option<NaiveDate> {
    let difference = (i64::from(weekday.num_days_from_sunday()) + DAYS_IN_WEEK
        - i64::from(from.weekday().num_days_from_sunday()))
        % DAYS_IN_WEEK;

    from.checked_add_signed(Duration::days(difference))
}

/// Active on a set of weekdays, every `interval` weeks.
///
/// Each weekday keeps its own phase: its first occurrence on or after
/// `dtstart`, repeated every `interval` weeks. Nothing before that first
/// occurrence is active and there is no end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Weekly {
    interval: i64,
    dtstart: NaiveDate,
    days: Days,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub interval: Option<i64>,
    pub days: Days,
}

impl Weekly {
    pub fn new(dtstart: impl CalendarDay, options: Options) -> Result<Self, Error> {
        let dtstart = dtstart.calendar_day();

        if options.days.is_empty() {
            return Err(Error::EmptyWeekdaySet);
        }

        let interval = checked_interval(options.interval)?;

        tracing::trace!(%dtstart, interval, days = ?options.days, "built weekly rule");

        Ok(Weekly {
            interval,
            dtstart,
            days: options.days,
        })
    }

    /// Every week on `weekday`, starting with its first occurrence on or
    /// after `from`.
    pub fn on(weekday: Weekday, from: impl CalendarDay) -> Result<Self, Error> {
        let from = from.calendar_day();
        let dtstart = next_occurrence(weekday, from).ok_or(Error::OutOfRange { dtstart: from })?;

        Weekly::new(
            dtstart,
            Options {
                days: Days::single(weekday),
                ..Options::default()
            },
        )
    }

    pub fn sundays(from: impl CalendarDay) -> Result<Self, Error> {
        Self::on(Weekday::Sun, from)
    }

    pub fn mondays(from: impl CalendarDay) -> Result<Self, Error> {
        Self::on(Weekday::Mon, from)
    }

    pub fn tuesdays(from: impl CalendarDay) -> Result<Self, Error> {
        Self::on(Weekday::Tue, from)
    }

    pub fn wednesdays(from: impl CalendarDay) -> Result<Self, Error> {
        Self::on(Weekday::Wed, from)
    }

    pub fn thursdays(from: impl CalendarDay) -> Result<Self, Error> {
        Self::on(Weekday::Thu, from)
    }

    pub fn fridays(from: impl CalendarDay) -> Result<Self, Error> {
        Self::on(Weekday::Fri, from)
    }

    pub fn saturdays(from: impl CalendarDay) -> Result<Self, Error> {
        Self::on(Weekday::Sat, from)
    }

    /// Monday to Friday. Starting on a weekend moves the start to the
    /// following Monday.
    pub fn weekdays(from: impl CalendarDay) -> Result<Self, Error> {
        Self::every_week_from(Days::WEEKDAYS, Weekday::Mon, from.calendar_day())
    }

    /// Saturday and Sunday. Starting on a weekday moves the start to the
    /// following Saturday.
    pub fn weekends(from: impl CalendarDay) -> Result<Self, Error> {
        Self::every_week_from(Days::WEEKENDS, Weekday::Sat, from.calendar_day())
    }

    fn every_week_from(days: Days, first: Weekday, from: NaiveDate) -> Result<Self, Error> {
        let dtstart = if days.contains(from.weekday()) {
            from
        } else {
            next_occurrence(first, from).ok_or(Error::OutOfRange { dtstart: from })?
        };

        Weekly::new(
            dtstart,
            Options {
                days,
                ..Options::default()
            },
        )
    }

    pub fn dtstart(&self) -> NaiveDate {
        self.dtstart
    }

    pub fn interval(&self) -> i64 {
        self.interval
    }

    pub fn days(&self) -> Days {
        self.days
    }

    pub fn is_active(&self, date: impl CalendarDay) -> bool {
        let date = date.calendar_day();

        if !self.days.contains(date.weekday()) {
            return false;
        }

        self.days.iter().any(|weekday| {
            match next_occurrence(weekday, self.dtstart) {
                Some(first) if first <= date => {
                    let days = (date - first).num_days();
                    days % DAYS_IN_WEEK == 0 && (days / DAYS_IN_WEEK) % self.interval == 0
                }
                _ => false,
            }
        })
    }
}

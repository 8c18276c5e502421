use crate::{CalendarDay, RRule};

/// A union of rules, minus any excluded dates.
///
/// A date is active when at least one `rrule` matches it and no `exrule`
/// does. An empty set is never active.
#[derive(Clone, Debug, Default)]
pub struct Set {
    rules: Vec<RRule>,
    exclusions: Vec<RRule>,
}

impl Set {
    pub fn new() -> Self {
        Set::default()
    }

    pub fn rrule(mut self, rule: impl Into<RRule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    pub fn exrule(mut self, rule: impl Into<RRule>) -> Self {
        self.exclusions.push(rule.into());
        self
    }

    pub fn is_active(&self, date: impl CalendarDay) -> bool {
        let date = date.calendar_day();

        self.rules.iter().any(|r| r.is_active(date))
            && !self.exclusions.iter().any(|r| r.is_active(date))
    }
}

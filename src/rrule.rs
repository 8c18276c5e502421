use crate::{CalendarDay, Daily, Frequency, Once, Weekly};

/// Any of the supported recurrence rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RRule {
    Once(Once),
    Daily(Daily),
    Weekly(Weekly),
}

impl RRule {
    pub fn frequency(&self) -> Frequency {
        match self {
            RRule::Once(_) => Frequency::Once,
            RRule::Daily(_) => Frequency::Daily,
            RRule::Weekly(_) => Frequency::Weekly,
        }
    }

    pub fn is_active(&self, date: impl CalendarDay) -> bool {
        match self {
            RRule::Once(o) => o.is_active(date),
            RRule::Daily(d) => d.is_active(date),
            RRule::Weekly(w) => w.is_active(date),
        }
    }
}

impl From<Once> for RRule {
    fn from(once: Once) -> Self {
        RRule::Once(once)
    }
}

impl From<Daily> for RRule {
    fn from(daily: Daily) -> Self {
        RRule::Daily(daily)
    }
}

impl From<Weekly> for RRule {
    fn from(weekly: Weekly) -> Self {
        RRule::Weekly(weekly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::{daily, weekly, Days, Weekday};

    #[test]
    fn dispatches_to_rule() {
        let rules: Vec<RRule> = vec![
            Once::new(a_friday()).into(),
            Daily::new(
                a_friday(),
                daily::Options {
                    interval: Some(2),
                    ..daily::Options::default()
                },
            )
            .unwrap()
            .into(),
            Weekly::new(
                a_friday(),
                weekly::Options {
                    days: Days::single(Weekday::Sat),
                    ..weekly::Options::default()
                },
            )
            .unwrap()
            .into(),
        ];

        let frequencies: Vec<_> = rules.iter().map(RRule::frequency).collect();
        assert_eq!(
            frequencies,
            vec![Frequency::Once, Frequency::Daily, Frequency::Weekly]
        );

        let tomorrow = a_friday() + ONE_DAY;
        let active: Vec<_> = rules.iter().map(|r| r.is_active(tomorrow)).collect();
        assert_eq!(active, vec![false, false, true]);

        let in_two_days = a_friday() + ONE_DAY * 2;
        let active: Vec<_> = rules.iter().map(|r| r.is_active(in_two_days)).collect();
        assert_eq!(active, vec![false, true, false]);
    }
}

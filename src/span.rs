use crate::date::CalendarDate;
use chrono::{Datelike, Months};
use core::fmt::{self, Display};

/// The calendar-aware distance between two dates, counted the anniversary way: whole years,
/// then whole months, then the days left over.
///
/// Months are counted from the start date's day of month, clamped to the end of shorter months,
/// so a span starting on the 31st of January reaches its first month anniversary on the last day
/// of February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct AgeSpan {
    /// Whole years elapsed.
    pub years: u32,
    /// Whole months elapsed since the last year anniversary (`0`–`11`).
    pub months: u32,
    /// Days elapsed since the last month anniversary.
    pub days: u32,
}

impl AgeSpan {
    /// Returns a new [AgeSpan].
    pub const fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Returns the span from `start` to `end`, or `None` if `end` is before `start`.
    ///
    /// ```
    /// use agecalc::prelude::*;
    ///
    /// let start = CalendarDate::explicit(2020, 1, 31).unwrap();
    /// let end = CalendarDate::explicit(2020, 3, 1).unwrap();
    /// // one month gets to Feb 29th, then a day to Mar 1st
    /// assert_eq!(Some(AgeSpan::new(0, 1, 1)), AgeSpan::between(&start, &end));
    /// assert_eq!(None, AgeSpan::between(&end, &start));
    /// ```
    pub fn between(start: &CalendarDate, end: &CalendarDate) -> Option<Self> {
        if end < start {
            return None;
        }

        let mut total_months = (end.year() - start.year()) * 12 + end.month() as i32
            - start.month() as i32;
        if end.day() < start.day() {
            // the last month hasn't been completed yet
            total_months -= 1;
        }
        // end >= start, so this is never negative
        let total_months = u32::try_from(total_months).ok()?;

        let anniversary = start.checked_add_months(Months::new(total_months))?;
        let days = u32::try_from(end.signed_duration_since(anniversary).num_days()).ok()?;

        Some(Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        })
    }

    /// Returns true if the span covers no time at all.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Display for AgeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Years, {} Months, {} Days",
            self.years, self.months, self.days
        )
    }
}

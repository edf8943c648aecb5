use crate::error::{CalcError, OffsetUnit};
use core::fmt::{self, Display};

/// An amount of years, months, and days to add to a [CalendarDate](crate::CalendarDate).
///
/// See [CalendarDate::checked_add](crate::CalendarDate::checked_add) for how it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct DateOffset {
    /// Whole years, added first.
    pub years: u64,
    /// Whole months, added second.
    pub months: u64,
    /// Days, added last.
    pub days: u64,
}

impl DateOffset {
    /// Returns a new [DateOffset].
    pub const fn new(years: u64, months: u64, days: u64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Parses raw text fields into a [DateOffset].
    ///
    /// Fields are lenient: a blank or unparseable field counts as `0`, meaning no offset in that
    /// unit. A leading `+` is accepted.
    ///
    /// ```
    /// use agecalc::DateOffset;
    ///
    /// let offset = DateOffset::parse("18", "", "x").unwrap();
    /// assert_eq!(DateOffset::new(18, 0, 0), offset);
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [CalcError::NegativeOffset] for the first field (in years, months, days order)
    ///   that holds a negative number.
    pub fn parse(years: &str, months: &str, days: &str) -> Result<Self, CalcError> {
        Ok(Self {
            years: parse_field(years, OffsetUnit::Years)?,
            months: parse_field(months, OffsetUnit::Months)?,
            days: parse_field(days, OffsetUnit::Days)?,
        })
    }

    /// Returns true if adding this offset would not move a date.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_field(raw: &str, unit: OffsetUnit) -> Result<u64, CalcError> {
    let value = raw.parse::<i64>().unwrap_or(0);
    u64::try_from(value).map_err(|_| CalcError::NegativeOffset { unit, value })
}

impl Display for DateOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

use crate::{date::CalendarDate, offset::DateOffset};
use core::fmt::{self, Display};

/// Errors from parsing or constructing a [CalendarDate].
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum DateError {
    /// The date string was not exactly 8 characters long.
    #[error("Date should be exactly 8 digits (DDMMYYYY), got {len} characters")]
    WrongLength {
        /// The length, in bytes, of the rejected string.
        len: usize,
    },

    /// The date string contained something other than an ASCII digit.
    #[error("Date should only contain digits, found a non-digit at position {position}")]
    NonDigit {
        /// Zero-based byte offset of the first non-digit.
        position: usize,
    },

    /// The digits decoded fine but do not name a day on the Gregorian calendar.
    #[error("Day {day:02}, month {month:02}, year {year:04} is not a valid calendar date")]
    InvalidDate {
        /// Decoded day of month.
        day: u32,
        /// Decoded month.
        month: u32,
        /// Decoded year.
        year: i32,
    },

    /// Explicit year, month, and day arguments could not be made into a date.
    #[error("Explicit year ({year}), month ({month}), and day ({day}) arguments cannot be made into a valid date")]
    InvalidDateArguments {
        /// Year argument.
        year: i32,
        /// Month argument.
        month: u32,
        /// Day argument.
        day: u32,
    },
}

/// Names the input a [CalcError::InvalidDate] came from, so the two dates of
/// [age_at_date](crate::age_at_date) can be told apart.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DateField {
    /// The date of birth.
    Birth,
    /// The date to compute an age at.
    Target,
}

impl Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateField::Birth => "Date of Birth",
            DateField::Target => "Target Date",
        })
    }
}

/// Units of a [DateOffset].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OffsetUnit {
    /// Whole years.
    Years,
    /// Whole months.
    Months,
    /// Days.
    Days,
}

impl Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OffsetUnit::Years => "years",
            OffsetUnit::Months => "months",
            OffsetUnit::Days => "days",
        })
    }
}

/// Errors from the age calculations.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum CalcError {
    /// One of the date inputs did not parse.
    #[error("Invalid {field} format.")]
    InvalidDate {
        /// Which input failed.
        field: DateField,
        /// Why it failed.
        #[source]
        source: DateError,
    },

    /// The date of birth comes after the reference date.
    #[error("Date of Birth ({birth}) is after today ({today})")]
    FutureDate {
        /// The parsed date of birth.
        birth: CalendarDate,
        /// The reference date.
        today: CalendarDate,
    },

    /// The target date comes before the date of birth.
    #[error("Target Date ({target}) precedes the Date of Birth ({birth})")]
    TargetBeforeBirth {
        /// The parsed date of birth.
        birth: CalendarDate,
        /// The parsed target date.
        target: CalendarDate,
    },

    /// An age offset value was negative.
    #[error("Age values cannot be negative: {value} {unit}")]
    NegativeOffset {
        /// The offending unit.
        unit: OffsetUnit,
        /// The negative value supplied.
        value: i64,
    },

    /// Adding the offset walked off the end of the supported calendar.
    #[error("Adding {offset} to {birth} is outside the supported date range")]
    OutOfRange {
        /// The parsed date of birth.
        birth: CalendarDate,
        /// The offset that could not be applied.
        offset: DateOffset,
    },
}

impl CalcError {
    pub(crate) fn invalid(field: DateField) -> impl FnOnce(DateError) -> Self {
        move |source| CalcError::InvalidDate { field, source }
    }
}

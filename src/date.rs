use crate::{error::DateError, offset::DateOffset};
use chrono::{Datelike, Days, Local, Months, NaiveDate, Utc};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// Number of characters in a raw date string (`DDMMYYYY`).
pub const DATE_DIGITS: usize = 8;

/// A validated day on the proleptic Gregorian calendar.
///
/// Created with [parse_date] (or [str::parse]) from an 8-digit `DDMMYYYY` string, or with one of
/// the explicit constructors. Dates are ordered chronologically.
///
/// ```
/// use agecalc::prelude::*;
///
/// let date: CalendarDate = "29022020".parse().unwrap();
/// assert_eq!("29 February 2020", date.to_string());
/// assert_eq!("29022020", date.to_digits());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns a new [CalendarDate] representing the current date in UTC at the time of this
    /// call.
    pub fn utc_today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns a new [CalendarDate] representing the current date in the system's local timezone
    /// at the time of this call.
    pub fn local_today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns result of a new [CalendarDate] representing the given date, or
    /// [DateError::InvalidDateArguments].
    pub fn explicit(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDateArguments { year, month, day })
    }

    /// Renders this date back into the `DDMMYYYY` digit form accepted by [parse_date].
    ///
    /// Years past 9999 render with more than four year digits, and so will not parse back.
    pub fn to_digits(&self) -> String {
        format!("{:02}{:02}{:04}", self.day(), self.month(), self.year())
    }

    /// Adds whole years, then whole months, then days. A day of month that does not exist after
    /// adding years or months is clamped to the last day of that month.
    ///
    /// Returns `None` if the result is outside the supported calendar range.
    pub fn checked_add(&self, offset: &DateOffset) -> Option<Self> {
        let years_as_months = u32::try_from(offset.years).ok()?.checked_mul(12)?;
        let months = u32::try_from(offset.months).ok()?;

        self.0
            .checked_add_months(Months::new(years_as_months))?
            .checked_add_months(Months::new(months))?
            .checked_add_days(Days::new(offset.days))
            .map(Self)
    }
}

/// Parses an 8-digit `DDMMYYYY` string into a [CalendarDate].
///
/// The string must already be stripped of display separators. Impossible dates (like the 29th
/// of February in a common year) are rejected rather than adjusted.
///
/// # Errors
///
/// - [DateError::WrongLength] if `raw` is not exactly 8 characters.
/// - [DateError::NonDigit] if any character is not an ASCII digit.
/// - [DateError::InvalidDate] if the digits do not name a real day. Year `0000` is rejected too.
pub fn parse_date(raw: &str) -> Result<CalendarDate, DateError> {
    let len = raw.chars().count();
    if len != DATE_DIGITS {
        return Err(DateError::WrongLength { len });
    }

    let mut digits = [0u32; DATE_DIGITS];
    for (position, c) in raw.chars().enumerate() {
        digits[position] = c.to_digit(10).ok_or(DateError::NonDigit { position })?;
    }

    let decimal = |range: &[u32]| range.iter().fold(0, |acc, d| acc * 10 + d);
    let day = decimal(&digits[0..2]);
    let month = decimal(&digits[2..4]);
    // at most 9999, so the cast can't wrap
    let year = decimal(&digits[4..8]) as i32;

    if year == 0 {
        return Err(DateError::InvalidDate { day, month, year });
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .map(CalendarDate)
        .ok_or(DateError::InvalidDate { day, month, year })
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// See [parse_date].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Deref for CalendarDate {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for CalendarDate {
    /// Long form, e.g. `03 February 2001`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d %B %Y"))
    }
}

//! # agecalc
//!
//! A library for computing a person's age in years, months, and days from their date of birth,
//! and for finding the date on which they reach a given age.
//!
//! Dates come in as raw 8-digit strings in day-month-year order (`DDMMYYYY`), the way a masked
//! `DD/MM/YYYY` input field holds them once its separators are stripped.
//!
//! ## Examples
//!
//! Age as of today (the caller supplies "today"):
//!
//! ```
//! use agecalc::prelude::*;
//!
//! let today = CalendarDate::explicit(2024, 3, 10).unwrap();
//! let age = age_from_today("15051990", &today).unwrap();
//! assert_eq!("33 Years, 9 Months, 24 Days", age.to_string());
//! ```
//!
//! Age at some other date:
//!
//! ```
//! use agecalc::prelude::*;
//!
//! let age = age_at_date("01011990", "01011990").unwrap();
//! assert!(age.is_zero());
//!
//! let err = age_at_date("01011990", "31021991").unwrap_err();
//! assert_eq!("Invalid Target Date format.", err.to_string());
//! ```
//!
//! The date an age is reached:
//!
//! ```
//! use agecalc::prelude::*;
//!
//! let date = date_from_age("31012023", "0", "1", "0").unwrap();
//! assert_eq!("28 February 2023", date.to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Calendar date**: A real day on the proleptic Gregorian calendar. It's modeled by the
//!   [`CalendarDate`] struct.
//! - **Age span**: The distance between two calendar dates counted the anniversary way: whole
//!   years, then whole months, then the days left over. It's modeled by the [`AgeSpan`] struct.
//! - **Offset**: An amount of years, months, and days to add to a date. It's modeled by the
//!   [`DateOffset`] struct.
//!
//! ## Month Ends
//!
//! Adding months (or years) to a date whose day doesn't exist in the resulting month lands on
//! that month's last day. `31 January + 1 month` is the 28th (or 29th) of February, and
//! `29 February + 1 year` is the 28th of February.
//!
//! Age spans count months the same way, so from the 31st of January, the first month is
//! complete on the last day of February.
//!
//! ## Prelude
//!
//! agecalc provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use agecalc::prelude::*;
//! ```
#![warn(missing_docs)]

mod calculator;
mod date;
mod error;
mod offset;
mod span;

pub use crate::calculator::{age_at_date, age_from_today, date_from_age};
pub use crate::date::{parse_date, CalendarDate, DATE_DIGITS};
pub use crate::error::{CalcError, DateError, DateField, OffsetUnit};
pub use crate::offset::DateOffset;
pub use crate::span::AgeSpan;

/// A convenience module appropriate for glob imports (`use agecalc::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::age_at_date;
    #[doc(no_inline)]
    pub use crate::age_from_today;
    #[doc(no_inline)]
    pub use crate::date_from_age;
    #[doc(no_inline)]
    pub use crate::parse_date;
    #[doc(no_inline)]
    pub use crate::AgeSpan;
    #[doc(no_inline)]
    pub use crate::CalcError;
    #[doc(no_inline)]
    pub use crate::CalendarDate;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::DateField;
    #[doc(no_inline)]
    pub use crate::DateOffset;
}

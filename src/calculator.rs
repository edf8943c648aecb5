use crate::{
    date::{parse_date, CalendarDate},
    error::{CalcError, DateField},
    offset::DateOffset,
    span::AgeSpan,
};
use tracing::{debug, trace};

fn parse_field(raw: &str, field: DateField) -> Result<CalendarDate, CalcError> {
    let parsed = parse_date(raw).map_err(CalcError::invalid(field));
    match &parsed {
        Ok(date) => trace!(%field, raw, %date, "parsed date"),
        Err(err) => debug!(%field, raw, %err, "rejected date"),
    }
    parsed
}

/// Calculates the age of someone born on `dob` as of `today`.
///
/// `today` is taken as an argument rather than read from the clock; use
/// [CalendarDate::local_today] or [CalendarDate::utc_today] to supply it.
///
/// ```
/// use agecalc::prelude::*;
///
/// let today = CalendarDate::explicit(2024, 3, 10).unwrap();
/// let age = age_from_today("15051990", &today).unwrap();
/// assert_eq!(AgeSpan::new(33, 9, 24), age);
/// ```
///
/// # Errors
///
/// - [CalcError::InvalidDate] if `dob` is not a valid `DDMMYYYY` date.
/// - [CalcError::FutureDate] if `dob` is after `today`.
pub fn age_from_today(dob: &str, today: &CalendarDate) -> Result<AgeSpan, CalcError> {
    let birth = parse_field(dob, DateField::Birth)?;
    let age = AgeSpan::between(&birth, today).ok_or(CalcError::FutureDate {
        birth,
        today: *today,
    })?;
    debug!(%birth, %today, %age, "age from today");
    Ok(age)
}

/// Calculates the age of someone born on `dob` as of the `target` date.
///
/// # Errors
///
/// - [CalcError::InvalidDate] if either date is not a valid `DDMMYYYY` date. Its `field` says
///   which one; the date of birth is checked first.
/// - [CalcError::TargetBeforeBirth] if `target` is before `dob`.
pub fn age_at_date(dob: &str, target: &str) -> Result<AgeSpan, CalcError> {
    let birth = parse_field(dob, DateField::Birth)?;
    let target = parse_field(target, DateField::Target)?;
    let age =
        AgeSpan::between(&birth, &target).ok_or(CalcError::TargetBeforeBirth { birth, target })?;
    debug!(%birth, %target, %age, "age at date");
    Ok(age)
}

/// Finds the date on which someone born on `dob` reaches the given age.
///
/// The age fields are parsed with [DateOffset::parse], so blank fields mean zero. Years are
/// added first, then months, then days, with month ends clamped along the way.
///
/// ```
/// use agecalc::prelude::*;
///
/// let date = date_from_age("31012023", "", "1", "").unwrap();
/// assert_eq!(CalendarDate::explicit(2023, 2, 28).unwrap(), date);
/// ```
///
/// # Errors
///
/// - [CalcError::InvalidDate] if `dob` is not a valid `DDMMYYYY` date.
/// - [CalcError::NegativeOffset] if any age field is negative.
/// - [CalcError::OutOfRange] if the resulting date can't be represented.
pub fn date_from_age(
    dob: &str,
    years: &str,
    months: &str,
    days: &str,
) -> Result<CalendarDate, CalcError> {
    let birth = parse_field(dob, DateField::Birth)?;
    let offset = DateOffset::parse(years, months, days)?;
    trace!(%offset, "parsed offset");
    let date = birth
        .checked_add(&offset)
        .ok_or(CalcError::OutOfRange { birth, offset })?;
    debug!(%birth, %offset, %date, "date from age");
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DateError, OffsetUnit};
    use rstest::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::explicit(year, month, day).unwrap()
    }

    #[fixture]
    fn today() -> CalendarDate {
        date(2024, 3, 10)
    }

    #[rstest]
    fn test_age_from_today(today: CalendarDate) {
        let args = [
            ("10032024", AgeSpan::new(0, 0, 0)), // born today
            ("09032024", AgeSpan::new(0, 0, 1)),
            ("10031990", AgeSpan::new(34, 0, 0)),
            ("15051990", AgeSpan::new(33, 9, 24)),
            ("29022020", AgeSpan::new(4, 0, 10)),
        ];

        for (dob, expected) in args {
            assert_eq!(Ok(expected), age_from_today(dob, &today), "dob {dob}");
        }
    }

    #[rstest]
    fn test_age_from_today_future(today: CalendarDate) {
        assert_eq!(
            Err(CalcError::FutureDate {
                birth: date(2024, 3, 11),
                today,
            }),
            age_from_today("11032024", &today)
        );
    }

    #[rstest]
    fn test_age_from_today_invalid(today: CalendarDate) {
        let args = ["", "1031990", "29022021", "ab032024", "10/03/2024"];

        for dob in args {
            let res = age_from_today(dob, &today);
            assert!(
                matches!(
                    res,
                    Err(CalcError::InvalidDate {
                        field: DateField::Birth,
                        ..
                    })
                ),
                "dob {dob}"
            );
        }
    }

    #[test]
    fn test_age_at_date() {
        let args = [
            ("01011990", "01011990", AgeSpan::new(0, 0, 0)),
            ("15032000", "15032000", AgeSpan::new(0, 0, 0)),
            ("15032000", "14042000", AgeSpan::new(0, 0, 30)),
            ("31012020", "01032020", AgeSpan::new(0, 1, 1)),
            ("01011990", "31121999", AgeSpan::new(9, 11, 30)),
        ];

        for (dob, target, expected) in args {
            assert_eq!(Ok(expected), age_at_date(dob, target), "{dob} to {target}");
        }
    }

    #[test]
    fn test_age_at_date_target_before_birth() {
        assert_eq!(
            Err(CalcError::TargetBeforeBirth {
                birth: date(2020, 1, 1),
                target: date(2019, 1, 1),
            }),
            age_at_date("01012020", "01012019")
        );
    }

    #[test]
    fn test_age_at_date_which_field() {
        let args = [
            ("3101199", "01012020", DateField::Birth),
            ("01012020", "3101199", DateField::Target),
            ("30022020", "01012021", DateField::Birth),
            ("01012020", "30022021", DateField::Target),
            ("bad", "bad", DateField::Birth), // birth is checked first
        ];

        for (dob, target, expected_field) in args {
            match age_at_date(dob, target) {
                Err(CalcError::InvalidDate { field, .. }) => assert_eq!(expected_field, field),
                other => panic!("expected invalid date, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_age_at_date_messages() {
        let birth = age_at_date("x", "01012020").unwrap_err();
        assert_eq!("Invalid Date of Birth format.", birth.to_string());

        let target = age_at_date("01012020", "x").unwrap_err();
        assert_eq!("Invalid Target Date format.", target.to_string());
    }

    #[test]
    fn test_age_at_date_keeps_source() {
        assert_eq!(
            Err(CalcError::InvalidDate {
                field: DateField::Target,
                source: DateError::WrongLength { len: 3 },
            }),
            age_at_date("01012020", "123")
        );
    }

    #[rstest]
    #[case("31012023", "0", "1", "0", date(2023, 2, 28))] // end-of-month clamp
    #[case("31012024", "0", "1", "0", date(2024, 2, 29))]
    #[case("29022020", "1", "", "", date(2021, 2, 28))]
    #[case("15051990", "18", "", "", date(2008, 5, 15))]
    #[case("15051990", "", "", "", date(1990, 5, 15))] // all blank
    #[case("15051990", "", "", "10000", date(2017, 9, 30))]
    #[case("31121999", "0", "0", "1", date(2000, 1, 1))]
    #[case("31012023", "1", "1", "1", date(2024, 3, 1))]
    fn test_date_from_age(
        #[case] dob: &str,
        #[case] years: &str,
        #[case] months: &str,
        #[case] days: &str,
        #[case] expected: CalendarDate,
    ) {
        assert_eq!(Ok(expected), date_from_age(dob, years, months, days));
    }

    #[test]
    fn test_date_from_age_negative() {
        let args = [
            ("-1", "0", "0", OffsetUnit::Years),
            ("0", "-1", "0", OffsetUnit::Months),
            ("0", "0", "-1", OffsetUnit::Days),
        ];

        for (years, months, days, unit) in args {
            assert_eq!(
                Err(CalcError::NegativeOffset { unit, value: -1 }),
                date_from_age("01012000", years, months, days)
            );
        }
    }

    #[test]
    fn test_date_from_age_invalid_dob() {
        assert!(matches!(
            date_from_age("31022000", "1", "", ""),
            Err(CalcError::InvalidDate {
                field: DateField::Birth,
                source: DateError::InvalidDate { .. },
            })
        ));
    }

    #[test]
    fn test_date_from_age_out_of_range() {
        assert!(matches!(
            date_from_age("01012000", "9223372036854775807", "", ""),
            Err(CalcError::OutOfRange { .. })
        ));
    }

    /// nothing is cached or shared between calls
    #[rstest]
    fn test_idempotent(today: CalendarDate) {
        assert_eq!(
            age_from_today("15051990", &today),
            age_from_today("15051990", &today)
        );
        assert_eq!(
            age_at_date("01012020", "01012019"),
            age_at_date("01012020", "01012019")
        );
        assert_eq!(
            date_from_age("31012023", "0", "1", "0"),
            date_from_age("31012023", "0", "1", "0")
        );
    }
}

//! Parsing of textual dates.
//!
//! Three shapes are accepted, tried in this order:
//!
//! 1. `YYYY-DOY`, e.g. `523-66`
//! 2. `YYYY-MM-DD`, e.g. `243-01-01`
//! 3. `YYYY-Month-DD`, e.g. `353-Month 3-33` or `123-m2-04`
//!
//! Year, day-of-year, month number and day are ASCII digit runs. In the third
//! shape the month is everything between the first and the last `-` and is
//! matched case-insensitively against full names, then short names.

use crate::date::DnDate;
use crate::doy;
use crate::error::CalendarError;
use crate::month::Month;

pub(crate) fn parse_date(
    months: &[Month],
    days_in_year: u32,
    input: &str,
) -> Result<DnDate, CalendarError> {
    let unrecognized = || CalendarError::UnrecognizedDate {
        input: input.to_string(),
    };

    let (year, rest) = input.split_once('-').ok_or_else(unrecognized)?;
    if !is_digits(year) {
        return Err(unrecognized());
    }

    if is_digits(rest) {
        let date = DnDate::new(parse_year(year)?, parse_number(rest, "day of year")?);
        return doy::check_day_of_year(date, days_in_year);
    }

    let (month, day) = rest.rsplit_once('-').ok_or_else(unrecognized)?;
    if month.is_empty() || !is_digits(day) {
        return Err(unrecognized());
    }
    let year = parse_year(year)?;
    let day = parse_number(day, "day")?;

    if is_digits(month) {
        return doy::date_from_parts(months, year, parse_number(month, "month")?, day);
    }

    let index = find_month(months, month).ok_or_else(|| CalendarError::UnknownMonthName {
        name: month.to_string(),
    })?;
    let month = u32::try_from(index + 1).map_err(|_| CalendarError::InvalidMonth {
        month: u32::MAX,
        count: months.len(),
    })?;
    doy::date_from_parts(months, year, month, day)
}

/// Finds a month by full name, falling back to short name.
fn find_month(months: &[Month], name: &str) -> Option<usize> {
    let wanted = name.to_lowercase();
    months
        .iter()
        .position(|m| m.full_name().to_lowercase() == wanted)
        .or_else(|| {
            months
                .iter()
                .position(|m| m.short_name().to_lowercase() == wanted)
        })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_year(s: &str) -> Result<i32, CalendarError> {
    s.parse().map_err(|_| CalendarError::InvalidYear {
        value: s.to_string(),
    })
}

fn parse_number(s: &str, field: &'static str) -> Result<u32, CalendarError> {
    s.parse().map_err(|_| CalendarError::InvalidNumber {
        field,
        value: s.to_string(),
    })
}

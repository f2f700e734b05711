//! Conversions between day-of-year and (month, day-of-month) for an
//! arbitrary month table.

use crate::date::{DateParts, DnDate};
use crate::error::CalendarError;
use crate::month::Month;

/// Returns `date` unchanged if its day-of-year lies in `1..=days_in_year`.
pub(crate) fn check_day_of_year(date: DnDate, days_in_year: u32) -> Result<DnDate, CalendarError> {
    if !(1..=days_in_year).contains(&date.day_of_year) {
        return Err(CalendarError::InvalidDayOfYear {
            doy: date.day_of_year,
            days_in_year,
        });
    }
    Ok(date)
}

/// Walks the month table until the remaining day count fits in a month.
pub(crate) fn date_parts(
    months: &[Month],
    days_in_year: u32,
    date: DnDate,
) -> Result<DateParts<'_>, CalendarError> {
    let mut remaining = check_day_of_year(date, days_in_year)?.day_of_year;
    for (month_index, month) in months.iter().enumerate() {
        if remaining <= month.days() {
            return Ok(DateParts {
                month,
                month_index,
                day_of_month: remaining,
            });
        }
        remaining -= month.days();
    }
    Err(CalendarError::InvalidDayOfYear {
        doy: date.day_of_year,
        days_in_year,
    })
}

/// Builds a date from a 1-based month and a day within that month.
pub(crate) fn date_from_parts(
    months: &[Month],
    year: i32,
    month: u32,
    day: u32,
) -> Result<DnDate, CalendarError> {
    let index = (month as usize)
        .checked_sub(1)
        .filter(|&i| i < months.len())
        .ok_or(CalendarError::InvalidMonth {
            month,
            count: months.len(),
        })?;
    let max_day = months[index].days();
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }
    let month_start: u32 = months[..index].iter().map(Month::days).sum();
    Ok(DnDate::new(year, month_start + day))
}

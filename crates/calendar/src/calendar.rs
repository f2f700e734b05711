//! The calendar aggregate: month table, current date, display format and alarms.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alarm::Alarm;
use crate::date::{DateInput, DateParts, DnDate};
use crate::doy;
use crate::error::CalendarError;
use crate::format::Template;
use crate::month::{Month, default_months};
use crate::parse;

/// Format used when none is configured.
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD";

/// Construction options for a [`Calendar`].
///
/// Every field is optional; missing fields fall back to the defaults. A
/// supplied `months` table replaces the default table as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<Vec<Month>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DnDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Vec<Alarm>>,
}

/// Serialized form of a [`Calendar`], as handed to a host for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarState {
    pub schema_version: u32,
    pub months: Vec<Month>,
    pub date: DnDate,
    pub format: String,
    #[serde(default)]
    pub alarms: Vec<Alarm>,
}

impl From<CalendarState> for CalendarOptions {
    fn from(state: CalendarState) -> Self {
        Self {
            schema_version: Some(state.schema_version),
            months: Some(state.months),
            date: Some(state.date),
            format: Some(state.format),
            alarms: Some(state.alarms),
        }
    }
}

/// A fictional calendar with a current-date cursor and named alarms.
///
/// The month table is fixed at construction. All mutators validate their
/// input first and leave the calendar untouched when they fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    schema_version: u32,
    months: Box<[Month]>,
    date: DnDate,
    format: String,
    alarms: Vec<Alarm>,
    days_in_year: u32,
}

impl Default for Calendar {
    fn default() -> Self {
        let months = default_months();
        let days_in_year = months.iter().map(Month::days).sum();
        Self {
            schema_version: 0,
            months: months.into_boxed_slice(),
            date: DnDate::default(),
            format: DEFAULT_FORMAT.to_string(),
            alarms: Vec::new(),
            days_in_year,
        }
    }
}

impl Calendar {
    /// Builds a calendar from options merged over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyMonthTable`] or
    /// [`CalendarError::InvalidMonthLength`] for an unusable month table,
    /// [`CalendarError::InvalidDayOfYear`] if the date does not fit the
    /// table or an alarm date falls outside the year, and
    /// [`CalendarError::DuplicateName`] if two alarms share a name.
    pub fn new(options: CalendarOptions) -> Result<Self, CalendarError> {
        let mut months = options.months.unwrap_or_else(default_months);
        if months.is_empty() {
            return Err(CalendarError::EmptyMonthTable);
        }

        let mut days_in_year: u32 = 0;
        for (i, month) in months.iter_mut().enumerate() {
            if month.days() == 0 {
                return Err(CalendarError::InvalidMonthLength {
                    name: month.full_name().to_string(),
                    days: month.days(),
                });
            }
            month.fill_numeric_name(i);
            days_in_year = days_in_year
                .checked_add(month.days())
                .ok_or(CalendarError::YearLengthOverflow)?;
        }

        let date = doy::check_day_of_year(options.date.unwrap_or_default(), days_in_year)?;

        let alarms = options.alarms.unwrap_or_default();
        for (i, alarm) in alarms.iter().enumerate() {
            doy::check_day_of_year(alarm.date, days_in_year)?;
            if alarms[..i].iter().any(|a| a.name == alarm.name) {
                return Err(CalendarError::DuplicateName {
                    name: alarm.name.clone(),
                });
            }
        }

        Ok(Self {
            schema_version: options.schema_version.unwrap_or(0),
            months: months.into_boxed_slice(),
            date,
            format: options.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            alarms,
            days_in_year,
        })
    }

    /// Rebuilds a calendar from its serialized form.
    pub fn from_state(state: CalendarState) -> Result<Self, CalendarError> {
        Self::new(state.into())
    }

    /// Returns the serialized form of this calendar.
    pub fn to_state(&self) -> CalendarState {
        CalendarState {
            schema_version: self.schema_version,
            months: self.months.to_vec(),
            date: self.date,
            format: self.format.clone(),
            alarms: self.alarms.clone(),
        }
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Returns a copy of the current date.
    pub fn date(&self) -> DnDate {
        self.date
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    /// Total number of days in a year, i.e. the sum of all month lengths.
    pub fn days_in_year(&self) -> u32 {
        self.days_in_year
    }

    /// Returns the month containing the current date.
    pub fn month(&self) -> Option<&Month> {
        self.date_parts(self.date).ok().map(|parts| parts.month)
    }

    // ---- Date codec ----

    /// Splits a date into its month and day-of-month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayOfYear`] if the day-of-year is
    /// outside this calendar's year.
    pub fn date_parts(&self, date: DnDate) -> Result<DateParts<'_>, CalendarError> {
        doy::date_parts(&self.months, self.days_in_year, date)
    }

    /// Month breakdown of the current date.
    pub fn current_date_parts(&self) -> Result<DateParts<'_>, CalendarError> {
        self.date_parts(self.date)
    }

    /// Builds a date from a year, a 1-based month and a day within that month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// naming the component that is out of range.
    pub fn date_from_parts(&self, year: i32, month: u32, day: u32) -> Result<DnDate, CalendarError> {
        doy::date_from_parts(&self.months, year, month, day)
    }

    /// Parses `YYYY-DOY`, `YYYY-MM-DD` or `YYYY-Month-DD` against this calendar.
    pub fn parse_date_str(&self, input: &str) -> Result<DnDate, CalendarError> {
        parse::parse_date(&self.months, self.days_in_year, input)
    }

    /// Renders the current date with the calendar's format.
    pub fn date_str(&self) -> Result<String, CalendarError> {
        self.format_date(self.date, &self.format)
    }

    /// Renders the current date with an explicit format.
    pub fn date_str_with(&self, format: &str) -> Result<String, CalendarError> {
        self.format_date(self.date, format)
    }

    /// Renders any date of this calendar with `format`.
    ///
    /// Placeholders are listed in the [crate docs](crate#date-templates).
    pub fn format_date(&self, date: DnDate, format: &str) -> Result<String, CalendarError> {
        let parts = self.date_parts(date)?;
        Ok(Template::compile(format).render(date, &parts))
    }

    // ---- Date mutation ----

    /// Moves the current date by `days`, which may be negative.
    ///
    /// Landing exactly on a year boundary yields the last day of the year,
    /// never day zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`] if the resulting year does not
    /// fit in an `i32`.
    pub fn add_days(&mut self, days: i64) -> Result<(), CalendarError> {
        if days == 0 {
            return Ok(());
        }
        let next = shift(self.date, days, self.days_in_year).ok_or(CalendarError::DateOverflow {
            year: self.date.year,
            days,
        })?;
        debug!(from = %self.date, to = %next, days, "moved date");
        self.date = next;
        Ok(())
    }

    /// Replaces the current date with a structured date or parsed text.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayOfYear`] for an out-of-range
    /// structured date, or any parse error for text input.
    pub fn set_date(&mut self, input: impl Into<DateInput>) -> Result<(), CalendarError> {
        let date = match input.into() {
            DateInput::Structured(date) => doy::check_day_of_year(date, self.days_in_year)?,
            DateInput::Text(text) => self.parse_date_str(&text)?,
        };
        debug!(from = %self.date, to = %date, "set date");
        self.date = date;
        Ok(())
    }

    // ---- Alarms ----

    /// Looks up an alarm by name.
    pub fn alarm(&self, name: &str) -> Option<&Alarm> {
        self.alarms.iter().find(|a| a.name == name)
    }

    /// Alarms falling after `after` and on or before `through`, in insertion order.
    pub fn alarms_due(&self, after: DnDate, through: DnDate) -> impl Iterator<Item = &Alarm> {
        self.alarms.iter().filter(move |a| a.is_due(after, through))
    }

    /// Appends an alarm.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DuplicateName`] if the name is taken, or
    /// [`CalendarError::InvalidDayOfYear`] if the date is outside the year.
    pub fn add_alarm(&mut self, alarm: Alarm) -> Result<(), CalendarError> {
        doy::check_day_of_year(alarm.date, self.days_in_year)?;
        if self.position(&alarm.name).is_some() {
            return Err(CalendarError::DuplicateName { name: alarm.name });
        }
        debug!(name = %alarm.name, date = %alarm.date, "added alarm");
        self.alarms.push(alarm);
        Ok(())
    }

    /// Replaces the alarm called `name` in place with `alarm`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotFound`] if no alarm is called `name`, or
    /// [`CalendarError::DuplicateName`] if `alarm.name` belongs to another alarm,
    /// or [`CalendarError::InvalidDayOfYear`] if the new date is outside the year.
    pub fn edit_alarm(&mut self, name: &str, alarm: Alarm) -> Result<(), CalendarError> {
        let index = self.require(name)?;
        doy::check_day_of_year(alarm.date, self.days_in_year)?;
        self.ensure_free(&alarm.name, index)?;
        debug!(name, new_name = %alarm.name, date = %alarm.date, "edited alarm");
        self.alarms[index] = alarm;
        Ok(())
    }

    /// Removes the alarm called `name` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotFound`] if no alarm is called `name`.
    pub fn remove_alarm(&mut self, name: &str) -> Result<Alarm, CalendarError> {
        let index = self.require(name)?;
        debug!(name, "removed alarm");
        Ok(self.alarms.remove(index))
    }

    /// Renames an alarm, keeping its date, message and position.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotFound`] if `old_name` is absent, or
    /// [`CalendarError::DuplicateName`] if `new_name` belongs to another alarm.
    pub fn rename_alarm(&mut self, old_name: &str, new_name: &str) -> Result<(), CalendarError> {
        let index = self.require(old_name)?;
        self.ensure_free(new_name, index)?;
        debug!(old_name, new_name, "renamed alarm");
        self.alarms[index].name = new_name.to_string();
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.alarms.iter().position(|a| a.name == name)
    }

    fn require(&self, name: &str) -> Result<usize, CalendarError> {
        self.position(name).ok_or_else(|| CalendarError::NotFound {
            name: name.to_string(),
        })
    }

    /// Fails if `name` is used by any alarm other than the one at `index`.
    fn ensure_free(&self, name: &str, index: usize) -> Result<(), CalendarError> {
        match self.position(name) {
            Some(other) if other != index => Err(CalendarError::DuplicateName {
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Moves `date` by `days` using floored division over zero-based day offsets.
fn shift(date: DnDate, days: i64, days_in_year: u32) -> Option<DnDate> {
    let year_len = i64::from(days_in_year);
    let offset = (i64::from(date.day_of_year) - 1).checked_add(days)?;
    let year = i64::from(date.year).checked_add(offset.div_euclid(year_len))?;
    let day_of_year = offset.rem_euclid(year_len) + 1;
    Some(DnDate::new(
        i32::try_from(year).ok()?,
        u32::try_from(day_of_year).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_month() -> Calendar {
        Calendar::new(CalendarOptions {
            months: Some(vec![
                Month::new("Month 1", "M1", 100),
                Month::new("Month 2", "M2", 20),
                Month::new("Month 3", "M3", 3),
            ]),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn default_calendar() {
        let cal = Calendar::default();
        assert_eq!(cal.schema_version(), 0);
        assert_eq!(cal.months().len(), 12);
        assert_eq!(cal.months()[0].full_name(), "January");
        assert_eq!(cal.date(), DnDate::new(1, 1));
        assert_eq!(cal.format(), "YYYY-MM-DD");
        assert!(cal.alarms().is_empty());
        assert_eq!(cal.days_in_year(), 365);
        assert_eq!(Calendar::new(CalendarOptions::default()).unwrap(), cal);
    }

    #[test]
    fn options_override_defaults() {
        let cal = Calendar::new(CalendarOptions {
            schema_version: Some(17),
            months: Some(vec![Month::new("Month 1", "M1", 11)]),
            date: Some(DnDate::new(1, 1)),
            format: Some("YYYY-MM-DD".to_string()),
            alarms: Some(vec![Alarm::new("Alarm 1", DnDate::new(1, 1), "A1")]),
        })
        .unwrap();
        assert_eq!(cal.schema_version(), 17);
        assert_eq!(cal.months().len(), 1);
        assert_eq!(cal.days_in_year(), 11);
        assert_eq!(cal.alarms().len(), 1);
    }

    #[test]
    fn supplied_months_replace_defaults_and_get_numeric_names() {
        let cal = Calendar::new(CalendarOptions {
            months: Some(vec![
                Month::new("Month One", "One", 11),
                Month::new("Month Two", "Two", 22),
                Month::new("Month Three", "Three", 33).with_numeric_name("III"),
            ]),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(cal.months().len(), 3);
        assert_eq!(cal.days_in_year(), 66);
        assert_eq!(cal.months()[0].numeric_name(), Some("01"));
        assert_eq!(cal.months()[1].numeric_name(), Some("02"));
        assert_eq!(cal.months()[2].numeric_name(), Some("III"));
    }

    #[test]
    fn rejects_unusable_month_tables() {
        let empty = CalendarOptions {
            months: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(Calendar::new(empty).unwrap_err(), CalendarError::EmptyMonthTable);

        let zero = CalendarOptions {
            months: Some(vec![Month::new("Void", "V", 0)]),
            ..Default::default()
        };
        assert_eq!(
            Calendar::new(zero).unwrap_err(),
            CalendarError::InvalidMonthLength {
                name: "Void".to_string(),
                days: 0
            }
        );

        let huge = CalendarOptions {
            months: Some(vec![Month::new("A", "A", u32::MAX), Month::new("B", "B", 1)]),
            ..Default::default()
        };
        assert_eq!(Calendar::new(huge).unwrap_err(), CalendarError::YearLengthOverflow);
    }

    #[test]
    fn rejects_out_of_range_initial_date() {
        let options = CalendarOptions {
            date: Some(DnDate::new(1, 366)),
            ..Default::default()
        };
        assert!(matches!(
            Calendar::new(options).unwrap_err(),
            CalendarError::InvalidDayOfYear { doy: 366, .. }
        ));
    }

    #[test]
    fn rejects_duplicate_initial_alarms() {
        let options = CalendarOptions {
            alarms: Some(vec![
                Alarm::new("a", DnDate::new(1, 1), "x"),
                Alarm::new("a", DnDate::new(1, 2), "y"),
            ]),
            ..Default::default()
        };
        assert_eq!(
            Calendar::new(options).unwrap_err(),
            CalendarError::DuplicateName {
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn add_days_nominal_and_year_crossing() {
        let mut cal = three_month();
        let cases: &[(i64, (i32, u32), (i32, u32))] = &[
            (1, (17, 12), (17, 13)),
            (-1, (17, 12), (17, 11)),
            (1, (1999, 123), (2000, 1)),
            (-1, (2000, 1), (1999, 123)),
            (0, (5, 5), (5, 5)),
        ];
        for &(days, (year, doy), (expected_year, expected_doy)) in cases {
            cal.set_date(DnDate::new(year, doy)).unwrap();
            cal.add_days(days).unwrap();
            assert_eq!(
                cal.date(),
                DnDate::new(expected_year, expected_doy),
                "add_days({days}) from ({year}, {doy})"
            );
        }
    }

    #[test]
    fn add_days_exact_year_multiple_lands_on_last_day() {
        let mut cal = three_month();
        cal.set_date(DnDate::new(10, 23)).unwrap();
        cal.add_days(100).unwrap();
        assert_eq!(cal.date(), DnDate::new(10, 123));

        cal.set_date(DnDate::new(10, 1)).unwrap();
        cal.add_days(245).unwrap();
        assert_eq!(cal.date(), DnDate::new(11, 123));
    }

    #[test]
    fn add_days_multi_year_backwards() {
        let mut cal = three_month();
        cal.set_date(DnDate::new(10, 1)).unwrap();
        cal.add_days(-124).unwrap();
        assert_eq!(cal.date(), DnDate::new(8, 123));

        cal.set_date(DnDate::new(10, 10)).unwrap();
        cal.add_days(-15).unwrap();
        assert_eq!(cal.date(), DnDate::new(9, 118));
    }

    #[test]
    fn add_days_overflow_leaves_date_unchanged() {
        let mut cal = Calendar::new(CalendarOptions {
            date: Some(DnDate::new(i32::MAX, 365)),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            cal.add_days(1).unwrap_err(),
            CalendarError::DateOverflow {
                year: i32::MAX,
                days: 1
            }
        );
        assert_eq!(cal.date(), DnDate::new(i32::MAX, 365));
        assert!(cal.add_days(i64::MAX).is_err());
    }

    #[test]
    fn set_date_copies_structured_input() {
        let mut cal = three_month();
        let date = DnDate::new(1999, 123);
        cal.set_date(date).unwrap();
        assert_eq!(cal.date(), date);
        cal.add_days(1).unwrap();
        assert_eq!(date, DnDate::new(1999, 123));
    }

    #[test]
    fn set_date_rejects_out_of_range() {
        let mut cal = three_month();
        for doy in [0, 124, 444] {
            assert!(cal.set_date(DnDate::new(1, doy)).is_err());
        }
        assert_eq!(cal.date(), DnDate::new(1, 1));
    }

    #[test]
    fn set_date_from_text() {
        let mut cal = three_month();
        let cases: &[(&str, i32, u32)] = &[
            ("523-01", 523, 1),
            ("523-66", 523, 66),
            ("243-01-01", 243, 1),
            ("7654-02-20", 7654, 120),
            ("123-M2-04", 123, 104),
            ("353-Month 3-3", 353, 123),
        ];
        for &(text, year, doy) in cases {
            cal.set_date(text).unwrap();
            assert_eq!(cal.date(), DnDate::new(year, doy), "text {text}");
        }
        for text in ["243-01-01-01", "bob", "534-00", "534-124", "123-M2-0", "123-M2-21"] {
            assert!(cal.set_date(text).is_err(), "text {text} should fail");
        }
    }

    #[test]
    fn month_of_current_date() {
        let mut cal = three_month();
        cal.set_date(DnDate::new(1, 101)).unwrap();
        assert_eq!(cal.month().map(Month::full_name), Some("Month 2"));
    }

    #[test]
    fn state_roundtrip() {
        let mut cal = three_month();
        cal.set_date("12-M3-2").unwrap();
        cal.add_alarm(Alarm::new("a", DnDate::new(12, 1), "m")).unwrap();
        let back = Calendar::from_state(cal.to_state()).unwrap();
        assert_eq!(back, cal);
    }

    #[test]
    fn shift_matches_floor_arithmetic() {
        let date = DnDate::new(0, 1);
        assert_eq!(shift(date, -1, 10), Some(DnDate::new(-1, 10)));
        assert_eq!(shift(date, -10, 10), Some(DnDate::new(-1, 1)));
        assert_eq!(shift(date, -11, 10), Some(DnDate::new(-2, 10)));
        assert_eq!(shift(date, 9, 10), Some(DnDate::new(0, 10)));
        assert_eq!(shift(date, 10, 10), Some(DnDate::new(1, 1)));
    }
}

//! Year/day-of-year dates and their month breakdown.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// A date as a year and a 1-based day within that year.
///
/// The value itself is not tied to a month table, so any `day_of_year` can
/// be stored. A [`Calendar`](crate::Calendar) checks the range whenever a
/// date enters it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct DnDate {
    /// Year; may be zero or negative.
    pub year: i32,
    /// Day within the year, starting at 1.
    pub day_of_year: u32,
}

impl DnDate {
    /// Creates a date from a year and a day-of-year.
    pub const fn new(year: i32, day_of_year: u32) -> Self {
        Self { year, day_of_year }
    }
}

impl Default for DnDate {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for DnDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.year, self.day_of_year)
    }
}

/// Input accepted by [`Calendar::set_date`](crate::Calendar::set_date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// An already structured date; copied after range validation.
    Structured(DnDate),
    /// Text in one of the accepted date forms; parsed against the calendar.
    Text(String),
}

impl From<DnDate> for DateInput {
    fn from(date: DnDate) -> Self {
        Self::Structured(date)
    }
}

impl From<&DnDate> for DateInput {
    fn from(date: &DnDate) -> Self {
        Self::Structured(*date)
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Month breakdown of a day-of-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts<'a> {
    /// The month containing the date.
    pub month: &'a Month,
    /// 0-based position of `month` in the month table.
    pub month_index: usize,
    /// 1-based day within `month`.
    pub day_of_month: u32,
}

impl DateParts<'_> {
    /// Returns the 1-based month number.
    pub fn month_number(&self) -> usize {
        self.month_index + 1
    }
}

//! Month definitions and the default month table.

use serde::{Deserialize, Serialize};

/// One entry of a calendar's month table.
///
/// Months are identified by position: the first entry is month 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Month {
    full_name: String,
    short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    numeric_name: Option<String>,
    days: u32,
}

impl Month {
    /// Creates a month without a numeric name.
    ///
    /// The day count is validated when the month is placed in a calendar.
    pub fn new(full_name: impl Into<String>, short_name: impl Into<String>, days: u32) -> Self {
        Self {
            full_name: full_name.into(),
            short_name: short_name.into(),
            numeric_name: None,
            days,
        }
    }

    /// Sets the two-digit numeric name, e.g. `"03"`.
    pub fn with_numeric_name(mut self, numeric_name: impl Into<String>) -> Self {
        self.numeric_name = Some(numeric_name.into());
        self
    }

    /// Returns the full name, e.g. `"January"`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the short name, e.g. `"Jan"`.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Returns the numeric name.
    ///
    /// Always `Some` for months obtained from a [`Calendar`](crate::Calendar).
    pub fn numeric_name(&self) -> Option<&str> {
        self.numeric_name.as_deref()
    }

    /// Returns the number of days in this month.
    pub fn days(&self) -> u32 {
        self.days
    }

    pub(crate) fn fill_numeric_name(&mut self, index: usize) {
        if self.numeric_name.is_none() {
            self.numeric_name = Some(format!("{:02}", index + 1));
        }
    }
}

/// Twelve Gregorian month names with February fixed at 28 days.
#[rustfmt::skip]
const DEFAULT_TABLE: [(&str, &str, u32); 12] = [
    ("January", "Jan", 31), ("February", "Feb", 28), ("March", "Mar", 31),
    ("April", "Apr", 30), ("May", "May", 31), ("June", "Jun", 30),
    ("July", "Jul", 31), ("August", "Aug", 31), ("September", "Sep", 30),
    ("October", "Oct", 31), ("November", "Nov", 30), ("December", "Dec", 31),
];

/// Returns the default 365-day month table.
pub fn default_months() -> Vec<Month> {
    DEFAULT_TABLE
        .iter()
        .enumerate()
        .map(|(i, &(full, short, days))| {
            Month::new(full, short, days).with_numeric_name(format!("{:02}", i + 1))
        })
        .collect()
}

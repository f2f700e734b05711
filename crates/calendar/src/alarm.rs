//! Named alarms pinned to calendar dates.

use serde::{Deserialize, Serialize};

use crate::date::DnDate;

/// A named reminder attached to a date.
///
/// The name is the alarm's identity within a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alarm {
    pub name: String,
    pub date: DnDate,
    pub message: String,
}

impl Alarm {
    pub fn new(name: impl Into<String>, date: DnDate, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date,
            message: message.into(),
        }
    }

    /// Returns true if the alarm falls in the half-open window `(after, through]`.
    pub fn is_due(&self, after: DnDate, through: DnDate) -> bool {
        after < self.date && self.date <= through
    }
}

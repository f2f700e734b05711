//! Error types for the dndate-calendar crate.

/// Broad classification of a [`CalendarError`].
///
/// Hosts that only need to decide how to report a failure can match on the
/// kind instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    InvalidArgument,
    /// An alarm name is already taken.
    DuplicateName,
    /// A referenced alarm does not exist.
    NotFound,
}

/// Error type for all fallible operations in the dndate-calendar crate.
///
/// Every variant carries the offending value so that the message alone
/// identifies which component of a date or which alarm was at fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year component cannot be represented.
    #[error("invalid year ({value})")]
    InvalidYear {
        /// The year text that was provided.
        value: String,
    },

    /// Returned when a month number is outside `1..=count`.
    #[error("invalid month ({month}) (must be 1..={count})")]
    InvalidMonth {
        /// The invalid 1-based month number.
        month: u32,
        /// Number of months in the calendar.
        count: usize,
    },

    /// Returned when a day number exceeds the length of its month.
    #[error("invalid day ({day}) for month {month} (must be 1..={max_day})")]
    InvalidDay {
        /// The invalid day-of-month.
        day: u32,
        /// The 1-based month the day was checked against.
        month: u32,
        /// Number of days in that month.
        max_day: u32,
    },

    /// Returned when a day-of-year is outside `1..=days_in_year`.
    #[error("invalid day of year ({doy}) (must be 1..={days_in_year})")]
    InvalidDayOfYear {
        /// The invalid day-of-year.
        doy: u32,
        /// Number of days in the calendar year.
        days_in_year: u32,
    },

    /// Returned when a textual month matches neither a full nor a short name.
    #[error("invalid month ({name})")]
    UnknownMonthName {
        /// The month text that was provided.
        name: String,
    },

    /// Returned when a numeric date component does not fit its type.
    #[error("invalid {field} ({value})")]
    InvalidNumber {
        /// Which component was being read.
        field: &'static str,
        /// The text that was provided.
        value: String,
    },

    /// Returned when a date string matches none of the accepted shapes.
    #[error(
        "invalid date string ({input}). Use one of the following formats: YYYY-DOY, YYYY-MM-DD, or YYYY-Month-DD"
    )]
    UnrecognizedDate {
        /// The rejected input.
        input: String,
    },

    /// Returned when a calendar is configured without any months.
    #[error("month table is empty")]
    EmptyMonthTable,

    /// Returned when a month is configured with zero days.
    #[error("month '{name}' has {days} days (must be at least 1)")]
    InvalidMonthLength {
        /// Full name of the offending month.
        name: String,
        /// The configured day count.
        days: u32,
    },

    /// Returned when the month lengths add up to more than `u32::MAX` days.
    #[error("month table is longer than {} days", u32::MAX)]
    YearLengthOverflow,

    /// Returned when moving the date would leave the representable year range.
    #[error("adding {days} days to year {year} overflows the year range")]
    DateOverflow {
        /// Year before the move.
        year: i32,
        /// Requested day offset.
        days: i64,
    },

    /// Returned when an alarm name is already in use.
    #[error("alarm with name {name} already exists")]
    DuplicateName {
        /// The conflicting alarm name.
        name: String,
    },

    /// Returned when no alarm has the given name.
    #[error("alarm with name {name} not found")]
    NotFound {
        /// The alarm name that was looked up.
        name: String,
    },
}

impl CalendarError {
    /// Returns the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateName { .. } => ErrorKind::DuplicateName,
            Self::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

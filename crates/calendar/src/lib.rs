//! # dndate-calendar
//!
//! Pure date arithmetic for fictional calendars with arbitrary month tables.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DnDate (year, day-of-year)"] -->|"Calendar::date_parts()"| B["(month, day-of-month)"]
//!     B -->|"Calendar::date_from_parts()"| A
//!     C["text"] -->|"Calendar::parse_date_str()"| A
//!     A -->|"Calendar::format_date()"| D["display string"]
//!     E["CalendarOptions"] -->|"Calendar::new()"| F["Calendar"]
//!     F -->|"Calendar::to_state()"| G["CalendarState"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use dndate_calendar::{Alarm, Calendar, CalendarOptions, DnDate, Month};
//!
//! let mut cal = Calendar::new(CalendarOptions {
//!     months: Some(vec![
//!         Month::new("Monotember", "Mon", 11),
//!         Month::new("Duotember", "Duo", 22),
//!         Month::new("Tritember", "Tri", 33),
//!     ]),
//!     ..Default::default()
//! })?;
//!
//! cal.set_date("5813-Duo-02")?;
//! assert_eq!(cal.date(), DnDate::new(5813, 13));
//! assert_eq!(cal.date_str_with("YYYY-Month-DD")?, "5813-Duotember-02");
//!
//! cal.add_days(60)?;
//! cal.add_alarm(Alarm::new("harvest", DnDate::new(5814, 40), "Bring in the grain"))?;
//! ```
//!
//! ## Date templates
//!
//! | Placeholder | Output |
//! |-------------|--------|
//! | `DOY` | day-of-year, unpadded |
//! | `YYYY` | year, zero-padded to the number of `Y`s |
//! | `DD` | day-of-month, zero-padded to the number of `D`s |
//! | `MM` | month number, zero-padded to the number of `M`s |
//! | `Month` | full month name |
//! | `Mon` | short month name |
//!
//! Any other character is copied verbatim.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month definitions and the default table |
//! | `date` | Year/day-of-year value, `set_date` input, month breakdown |
//! | `doy` | Day-of-year ⇄ month/day conversions |
//! | `format` | Template compilation and rendering |
//! | `parse` | Textual date parsing |
//! | `alarm` | Named alarms |
//! | `calendar` | The `Calendar` aggregate |
//! | `error` | Error types |

mod alarm;
mod calendar;
mod date;
mod doy;
mod error;
mod format;
mod month;
mod parse;

pub use alarm::Alarm;
pub use calendar::{Calendar, CalendarOptions, CalendarState, DEFAULT_FORMAT};
pub use date::{DateInput, DateParts, DnDate};
pub use error::{CalendarError, ErrorKind};
pub use month::{Month, default_months};

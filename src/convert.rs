//! Conversion from TOML configuration types to library types.

use anyhow::{Context, Result};

use dndate_calendar::{Calendar, CalendarOptions, Month};
use dndate_state::SCHEMA_VERSION;

use crate::config::{CalendarToml, MonthToml};

/// Build a fresh calendar from the `[calendar]` section.
pub fn seed_calendar(cfg: &CalendarToml) -> Result<Calendar> {
    let options = CalendarOptions {
        schema_version: Some(SCHEMA_VERSION),
        months: cfg
            .months
            .as_ref()
            .map(|months| months.iter().map(build_month).collect()),
        format: cfg.format.clone(),
        ..Default::default()
    };
    let mut calendar = Calendar::new(options).context("invalid [calendar] configuration")?;
    if let Some(ref date) = cfg.date {
        calendar
            .set_date(date.as_str())
            .with_context(|| format!("invalid [calendar] date: {date}"))?;
    }
    Ok(calendar)
}

/// Short names default to the first three characters of the full name.
fn build_month(month: &MonthToml) -> Month {
    let short_name = month
        .short_name
        .clone()
        .unwrap_or_else(|| month.name.chars().take(3).collect());
    let built = Month::new(month.name.clone(), short_name, month.days);
    match month.numeric_name {
        Some(ref numeric) => built.with_numeric_name(numeric.clone()),
        None => built,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dndate_calendar::DnDate;

    fn month(name: &str, days: u32) -> MonthToml {
        MonthToml {
            name: name.to_string(),
            short_name: None,
            numeric_name: None,
            days,
        }
    }

    #[test]
    fn default_section_gives_default_calendar() {
        let cal = seed_calendar(&CalendarToml::default()).unwrap();
        assert_eq!(cal.schema_version(), SCHEMA_VERSION);
        assert_eq!(cal.days_in_year(), 365);
        assert_eq!(cal.date(), DnDate::new(1, 1));
        assert_eq!(cal.format(), "YYYY-MM-DD");
    }

    #[test]
    fn custom_months_and_date() {
        let cfg = CalendarToml {
            format: Some("DD Month YYYY".to_string()),
            date: Some("1492-alturiak-02".to_string()),
            months: Some(vec![month("Hammer", 30), month("Alturiak", 30)]),
        };
        let cal = seed_calendar(&cfg).unwrap();
        assert_eq!(cal.months()[1].short_name(), "Alt");
        assert_eq!(cal.months()[1].numeric_name(), Some("02"));
        assert_eq!(cal.date(), DnDate::new(1492, 32));
        assert_eq!(cal.date_str().unwrap(), "02 Alturiak 1492");
    }

    #[test]
    fn explicit_short_and_numeric_names_are_kept() {
        let mut m = month("Midwinter", 1);
        m.short_name = Some("MW".to_string());
        m.numeric_name = Some("--".to_string());
        let built = build_month(&m);
        assert_eq!(built.short_name(), "MW");
        assert_eq!(built.numeric_name(), Some("--"));
    }

    #[test]
    fn invalid_date_is_reported() {
        let cfg = CalendarToml {
            date: Some("1492-13-01".to_string()),
            ..Default::default()
        };
        let err = seed_calendar(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("1492-13-01"));
    }

    #[test]
    fn empty_month_table_is_reported() {
        let cfg = CalendarToml {
            months: Some(Vec::new()),
            ..Default::default()
        };
        assert!(seed_calendar(&cfg).is_err());
    }
}

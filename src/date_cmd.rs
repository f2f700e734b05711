use anyhow::{Context, Result};
use tracing::info;

use dndate_calendar::Calendar;

/// Current date, rendered with `format` or the calendar's own template.
pub fn show(calendar: &Calendar, format: Option<&str>) -> Result<String> {
    let rendered = match format {
        Some(f) => calendar.date_str_with(f),
        None => calendar.date_str(),
    };
    rendered.context("failed to render current date")
}

/// Moves the date by `days` and returns the output lines: the new date,
/// followed by every alarm passed on the way forward.
pub fn advance(calendar: &mut Calendar, days: i64) -> Result<Vec<String>> {
    let from = calendar.date();
    calendar
        .add_days(days)
        .with_context(|| format!("cannot move {days} days from {from}"))?;
    let to = calendar.date();

    let mut lines = vec![show(calendar, None)?];
    if days > 0 {
        for alarm in calendar.alarms_due(from, to) {
            info!(name = %alarm.name, date = %alarm.date, "alarm due");
            lines.push(format!("Alarm '{}': {}", alarm.name, alarm.message));
        }
    }
    Ok(lines)
}

/// Sets the date from text and returns it rendered.
pub fn set(calendar: &mut Calendar, date: &str) -> Result<String> {
    calendar.set_date(date)?;
    show(calendar, None)
}

/// Full name of the month holding the current date.
pub fn current_month(calendar: &Calendar) -> Result<String> {
    calendar
        .month()
        .map(|m| m.full_name().to_string())
        .with_context(|| format!("current date {} is outside the month table", calendar.date()))
}

/// One line per month: number, numeric name, full and short names, length.
/// The current month is marked with `*`.
pub fn months(calendar: &Calendar) -> Result<Vec<String>> {
    let current = calendar.current_date_parts()?.month_index;
    Ok(calendar
        .months()
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "{}{:>2}  {:<4} {:<16} {:<6} {:>3} days",
                if i == current { '*' } else { ' ' },
                i + 1,
                m.numeric_name().unwrap_or("-"),
                m.full_name(),
                m.short_name(),
                m.days()
            )
        })
        .collect())
}

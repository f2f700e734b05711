use anyhow::{Context, Result};

use dndate_calendar::{Alarm, Calendar, CalendarError};

use crate::cli::{AlarmAddArgs, AlarmEditArgs};

pub fn add(calendar: &mut Calendar, args: AlarmAddArgs) -> Result<()> {
    let date = calendar
        .parse_date_str(&args.date)
        .with_context(|| format!("invalid date for alarm '{}'", args.name))?;
    calendar.add_alarm(Alarm::new(args.name, date, args.message.join(" ")))?;
    Ok(())
}

/// Applies the given overrides to an existing alarm.
pub fn edit(calendar: &mut Calendar, args: AlarmEditArgs) -> Result<()> {
    let mut alarm = calendar
        .alarm(&args.name)
        .cloned()
        .ok_or_else(|| CalendarError::NotFound {
            name: args.name.clone(),
        })?;
    if let Some(new_name) = args.new_name {
        alarm.name = new_name;
    }
    if let Some(ref date) = args.date {
        alarm.date = calendar
            .parse_date_str(date)
            .with_context(|| format!("invalid date for alarm '{}'", args.name))?;
    }
    if let Some(message) = args.message {
        alarm.message = message;
    }
    calendar.edit_alarm(&args.name, alarm)?;
    Ok(())
}

pub fn remove(calendar: &mut Calendar, name: &str) -> Result<()> {
    calendar.remove_alarm(name)?;
    Ok(())
}

pub fn rename(calendar: &mut Calendar, old_name: &str, new_name: &str) -> Result<()> {
    calendar.rename_alarm(old_name, new_name)?;
    Ok(())
}

/// One line per alarm, dates in the calendar's format.
pub fn list(calendar: &Calendar) -> Result<Vec<String>> {
    calendar
        .alarms()
        .iter()
        .map(|alarm| {
            let date = calendar
                .format_date(alarm.date, calendar.format())
                .with_context(|| format!("failed to render date of alarm '{}'", alarm.name))?;
            Ok::<_, anyhow::Error>(format!("{}  {}  {}", date, alarm.name, alarm.message))
        })
        .collect()
}

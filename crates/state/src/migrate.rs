//! Upgrades stored calendar documents to the current schema.
//!
//! | Stored version | Shape | Upgrade |
//! |----------------|-------|---------|
//! | `0.1` (legacy) | `{schemaVersion, year, dayOfYear, months: [{name, days}]}` | restructured, then as version 0 |
//! | `0` / missing | current shape | day-0 dates normalized, version stamped |
//! | `1` | current shape | none |

use serde_json::{Value, json};
use tracing::info;

use dndate_calendar::{DEFAULT_FORMAT, Month, default_months};

use crate::error::StateError;

/// Schema version written by [`save`](crate::save).
pub const SCHEMA_VERSION: u32 = 1;

/// Converts any supported stored document into the current shape.
///
/// # Errors
///
/// Returns [`StateError::UnsupportedSchema`] for documents newer than
/// [`SCHEMA_VERSION`] and [`StateError::Malformed`] when required fields are
/// missing or mistyped.
pub fn migrate(mut state: Value) -> Result<Value, StateError> {
    if !state.is_object() {
        return Err(StateError::malformed("state is not a JSON object"));
    }

    if is_legacy(&state) {
        info!("migrating legacy calendar state");
        state = from_legacy(&state)?;
    }

    let version = schema_version(&state)?;
    if version > SCHEMA_VERSION {
        return Err(StateError::UnsupportedSchema {
            version,
            supported: SCHEMA_VERSION,
        });
    }
    if version < SCHEMA_VERSION {
        normalize_day_zero(&mut state)?;
        state["schemaVersion"] = json!(SCHEMA_VERSION);
        info!(from = version, to = SCHEMA_VERSION, "upgraded calendar state");
    }
    Ok(state)
}

fn is_legacy(state: &Value) -> bool {
    state.get("dayOfYear").is_some() && state.get("date").is_none()
}

fn schema_version(state: &Value) -> Result<u32, StateError> {
    match state.get("schemaVersion") {
        None => Ok(0),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| StateError::malformed(format!("schemaVersion {v} is not a version number"))),
    }
}

/// Rebuilds a legacy document, whose months carry a single name, in the current shape.
fn from_legacy(state: &Value) -> Result<Value, StateError> {
    let year = state
        .get("year")
        .and_then(Value::as_i64)
        .ok_or_else(|| StateError::malformed("legacy state has no integer year"))?;
    let day_of_year = state
        .get("dayOfYear")
        .and_then(Value::as_u64)
        .ok_or_else(|| StateError::malformed("legacy state has no integer dayOfYear"))?;

    let months = match state.get("months").and_then(Value::as_array) {
        Some(months) => months.iter().map(legacy_month).collect::<Result<Vec<_>, _>>()?,
        None => default_months()
            .iter()
            .map(|m| json!({ "fullName": m.full_name(), "shortName": m.short_name(), "days": m.days() }))
            .collect(),
    };

    Ok(json!({
        "schemaVersion": 0,
        "months": months,
        "date": { "year": year, "dayOfYear": day_of_year },
        "format": DEFAULT_FORMAT,
        "alarms": [],
    }))
}

fn legacy_month(month: &Value) -> Result<Value, StateError> {
    let name = month
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StateError::malformed("legacy month has no name"))?;
    let days = month
        .get("days")
        .and_then(Value::as_u64)
        .ok_or_else(|| StateError::malformed(format!("legacy month '{name}' has no day count")))?;
    let short_name: String = name.chars().take(3).collect();
    Ok(json!({ "fullName": name, "shortName": short_name, "days": days }))
}

/// Older writers could store day 0 after landing exactly on a year boundary.
/// That day is the last day of the previous year.
fn normalize_day_zero(state: &mut Value) -> Result<(), StateError> {
    if state.pointer("/date/dayOfYear").and_then(Value::as_u64) != Some(0) {
        return Ok(());
    }
    let year = state
        .pointer("/date/year")
        .and_then(Value::as_i64)
        .ok_or_else(|| StateError::malformed("date has no integer year"))?;
    let days_in_year: u64 = match state.get("months").and_then(Value::as_array) {
        Some(months) => months
            .iter()
            .map(|m| m.get("days").and_then(Value::as_u64).unwrap_or(0))
            .sum(),
        None => default_months().iter().map(Month::days).map(u64::from).sum(),
    };
    info!(year, days_in_year, "normalizing day 0 to the last day of the previous year");
    state["date"] = json!({ "year": year - 1, "dayOfYear": days_in_year });
    Ok(())
}

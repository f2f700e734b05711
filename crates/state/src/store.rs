//! Reading and writing calendar state documents.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use dndate_calendar::{Calendar, CalendarState};

use crate::error::StateError;
use crate::migrate::migrate;

/// Decodes a state document of any supported schema version.
pub fn from_json(json: &str) -> Result<Calendar, StateError> {
    let raw: Value = serde_json::from_str(json).map_err(StateError::json)?;
    let state: CalendarState = serde_json::from_value(migrate(raw)?).map_err(StateError::json)?;
    Ok(Calendar::from_state(state)?)
}

/// Encodes a calendar as a pretty-printed state document.
pub fn to_json(calendar: &Calendar) -> Result<String, StateError> {
    serde_json::to_string_pretty(&calendar.to_state()).map_err(StateError::json)
}

/// Loads the calendar stored at `path`.
///
/// Returns `Ok(None)` if the file does not exist yet.
pub fn load(path: &Path) -> Result<Option<Calendar>, StateError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no calendar state on disk");
            return Ok(None);
        }
        Err(source) => {
            return Err(StateError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let calendar = from_json(&text)?;
    info!(
        path = %path.display(),
        date = %calendar.date(),
        alarms = calendar.alarms().len(),
        "loaded calendar state"
    );
    Ok(Some(calendar))
}

/// Writes `calendar` to `path`, creating parent directories as needed.
pub fn save(path: &Path, calendar: &Calendar) -> Result<(), StateError> {
    let json = to_json(calendar)?;
    let io_err = |source| StateError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, json).map_err(io_err)?;
    info!(path = %path.display(), date = %calendar.date(), "saved calendar state");
    Ok(())
}

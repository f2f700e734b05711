use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level dndate configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DndateConfig {
    /// Where the calendar state is stored.
    #[serde(default = "default_state_path")]
    pub state: PathBuf,

    /// Calendar used when no state exists yet or on `reset`.
    #[serde(default)]
    pub calendar: CalendarToml,
}

impl Default for DndateConfig {
    fn default() -> Self {
        Self {
            state: default_state_path(),
            calendar: CalendarToml::default(),
        }
    }
}

fn default_state_path() -> PathBuf {
    PathBuf::from("dndate.json")
}

/// Seed settings for a new calendar.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Display template, e.g. `"DD Month YYYY"`.
    #[serde(default)]
    pub format: Option<String>,
    /// Starting date in any accepted text form.
    #[serde(default)]
    pub date: Option<String>,
    /// Month table; the 12-month default is used when absent.
    #[serde(default)]
    pub months: Option<Vec<MonthToml>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthToml {
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub numeric_name: Option<String>,
    pub days: u32,
}

/// Reads the configuration at `path`, falling back to defaults if the file
/// does not exist.
pub fn load(path: &Path) -> Result<DndateConfig> {
    let toml_str = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(DndateConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read config: {}", path.display()));
        }
    };
    toml::from_str(&toml_str).with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

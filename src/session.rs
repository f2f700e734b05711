use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use dndate_calendar::Calendar;

use crate::config::DndateConfig;
use crate::convert;

/// A calendar loaded from (or destined for) a state file.
pub struct Session {
    path: PathBuf,
    pub calendar: Calendar,
}

impl Session {
    /// Load the stored calendar, seeding a new one from `config` when the
    /// state file does not exist yet.
    pub fn open(path: &Path, config: &DndateConfig) -> Result<Self> {
        let stored = dndate_state::load(path)
            .with_context(|| format!("failed to load calendar state: {}", path.display()))?;
        let calendar = match stored {
            Some(calendar) => calendar,
            None => {
                info!(path = %path.display(), "seeding new calendar from config");
                convert::seed_calendar(&config.calendar)?
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            calendar,
        })
    }

    /// Start over from the configured calendar, ignoring any stored state.
    pub fn reset(path: &Path, config: &DndateConfig) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            calendar: convert::seed_calendar(&config.calendar)?,
        })
    }

    pub fn save(&self) -> Result<()> {
        dndate_state::save(&self.path, &self.calendar)
            .with_context(|| format!("failed to save calendar state: {}", self.path.display()))
    }
}

//! User settings for the study guide
//!
//! Manages display and logging preferences. Navigation state is never
//! stored here; every session starts on the first step unless told
//! otherwise on the command line.

use serde::{Deserialize, Serialize};

use super::paths::GuidePaths;
use crate::error::GuideError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Interval between TUI tick events, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Whether the TUI captures the mouse for clickable markers and buttons
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,

    /// Default tracing filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether TUI sessions write a log file
    #[serde(default = "default_true")]
    pub log_to_file: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse_enabled: true,
            log_level: default_log_level(),
            log_to_file: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &GuidePaths) -> Result<Self, GuideError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Defaults are not written until `init`
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| GuideError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| GuideError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GuidePaths) -> Result<(), GuideError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GuideError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GuideError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the TUI cannot run with
    pub fn validate(&self) -> Result<(), GuideError> {
        if self.tick_rate_ms == 0 {
            return Err(GuideError::Validation(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

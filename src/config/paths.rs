//! Path management for the study guide
//!
//! ## Path Resolution Order
//!
//! 1. `STUDY_GUIDE_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/study-guide` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GuideError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "STUDY_GUIDE_DIR";

/// Manages all paths used by the study guide
#[derive(Debug, Clone)]
pub struct GuidePaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl GuidePaths {
    /// Create a new GuidePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `STUDY_GUIDE_DIR` is not set.
    pub fn new() -> Result<Self, GuideError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create GuidePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory TUI sessions write their logs to
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), GuideError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GuideError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| GuideError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, GuideError> {
    ProjectDirs::from("", "", "study-guide")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GuideError::Config("Could not determine a config directory".into()))
}

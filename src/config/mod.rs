//! Configuration module for the study guide
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GuidePaths;
pub use settings::Settings;

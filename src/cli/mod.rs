//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the guide content.

pub mod config;
pub mod guide;

pub use config::{handle_config_command, handle_init_command};
pub use guide::{
    handle_materials_command, handle_show_command, handle_steps_command, navigator_for,
    OutputFormat,
};

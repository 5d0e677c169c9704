//! Display formatting for CLI output
//!
//! Plain-text renderings of the guide for the non-interactive commands.

pub mod catalog;
pub mod guide;

pub use catalog::{format_materials, format_step_table};
pub use guide::format_guide;

//! Guide content commands
//!
//! Non-interactive views of the guide: a single page, the step catalog and
//! the materials checklist.

use clap::ValueEnum;
use std::io::Write;

use crate::display::{format_guide, format_materials, format_step_table};
use crate::error::{GuideError, GuideResult};
use crate::export::{json, yaml};
use crate::models::Catalog;
use crate::navigation::Navigator;

/// Output format for the step listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON (guide title, steps and materials)
    Json,
    /// YAML (guide title, steps and materials)
    Yaml,
}

/// Build a navigator positioned on a 1-based step number
pub fn navigator_for(step: Option<usize>) -> GuideResult<Navigator> {
    let catalog = Catalog::builtin();
    match step {
        None => Ok(Navigator::new(catalog)),
        Some(0) => Err(GuideError::Validation(
            "Step numbers start at 1".into(),
        )),
        Some(number) => Navigator::starting_at(catalog, number - 1),
    }
}

/// Print the page for one step
pub fn handle_show_command<W: Write>(step: Option<usize>, out: &mut W) -> GuideResult<()> {
    let navigator = navigator_for(step)?;
    write!(out, "{}", format_guide(&navigator))?;
    Ok(())
}

/// Print the step catalog
pub fn handle_steps_command<W: Write>(format: OutputFormat, out: &mut W) -> GuideResult<()> {
    let catalog = Catalog::builtin();
    match format {
        OutputFormat::Table => writeln!(out, "{}", format_step_table(&catalog))?,
        OutputFormat::Json => json::export_guide_json(&catalog, out, true)?,
        OutputFormat::Yaml => yaml::export_guide_yaml(&catalog, out)?,
    }
    Ok(())
}

/// Print the materials checklist
pub fn handle_materials_command<W: Write>(out: &mut W) -> GuideResult<()> {
    write!(out, "{}", format_materials())?;
    Ok(())
}

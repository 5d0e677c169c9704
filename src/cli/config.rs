//! Configuration commands

use std::io::Write;

use crate::config::{GuidePaths, Settings};
use crate::error::GuideResult;

/// Print resolved paths and active settings
pub fn handle_config_command<W: Write>(
    paths: &GuidePaths,
    settings: &Settings,
    out: &mut W,
) -> GuideResult<()> {
    writeln!(out, "Study Guide Configuration")?;
    writeln!(out, "=========================")?;
    writeln!(out, "Config directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
    writeln!(out, "Log directory:    {}", paths.log_dir().display())?;
    writeln!(
        out,
        "Initialized:      {}",
        if paths.is_initialized() { "yes" } else { "no" }
    )?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Tick rate:      {} ms", settings.tick_rate_ms)?;
    writeln!(out, "  Mouse enabled:  {}", settings.mouse_enabled)?;
    writeln!(out, "  Log level:      {}", settings.log_level)?;
    writeln!(out, "  Log to file:    {}", settings.log_to_file)?;
    Ok(())
}

/// Write the settings file
///
/// An existing file is left alone unless `force` is set.
pub fn handle_init_command<W: Write>(
    paths: &GuidePaths,
    settings: &Settings,
    force: bool,
    out: &mut W,
) -> GuideResult<()> {
    if paths.is_initialized() && !force {
        writeln!(
            out,
            "Settings already exist at {} (use --force to overwrite)",
            paths.settings_file().display()
        )?;
        return Ok(());
    }

    settings.save(paths)?;
    tracing::info!(path = %paths.settings_file().display(), "settings written");
    writeln!(out, "Settings written to {}", paths.settings_file().display())?;
    Ok(())
}

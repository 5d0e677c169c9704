use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;

use study_guide::cli::{
    handle_config_command, handle_init_command, handle_materials_command, handle_show_command,
    handle_steps_command, navigator_for, OutputFormat,
};
use study_guide::config::{GuidePaths, Settings};
use study_guide::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "study-guide",
    version,
    about = "Step-by-step guide for studying AP Statistics with an AI tutor",
    long_about = "Study Guide walks you through a five-step workflow for learning \
                  AP Statistics from a video with Grok as your tutor. Run it without \
                  arguments to open the interactive guide."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive guide (default)
    #[command(alias = "ui")]
    Tui {
        /// Step to start on (1-5)
        #[arg(short, long)]
        step: Option<usize>,
    },

    /// Print one step of the guide
    Show {
        /// Step to print (1-5)
        #[arg(short, long)]
        step: Option<usize>,
    },

    /// List every step
    Steps {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the materials checklist
    Materials,

    /// Show current configuration and paths
    Config,

    /// Write the default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GuidePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui { step: None });
    let is_tui_mode = matches!(command, Commands::Tui { .. });
    let _logging = init_logging(&paths, &settings, is_tui_mode, cli.verbose)?;

    let mut stdout = io::stdout();

    match command {
        Commands::Tui { step } => {
            // Validate before taking over the terminal
            let navigator = navigator_for(step)?;
            study_guide::tui::run_tui(&settings, navigator)?;
        }
        Commands::Show { step } => handle_show_command(step, &mut stdout)?,
        Commands::Steps { format } => handle_steps_command(format, &mut stdout)?,
        Commands::Materials => handle_materials_command(&mut stdout)?,
        Commands::Config => handle_config_command(&paths, &settings, &mut stdout)?,
        Commands::Init { force } => handle_init_command(&paths, &settings, force, &mut stdout)?,
    }

    Ok(())
}

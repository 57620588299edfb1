use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crime_report::cli::{
    handle_charges_command, handle_fields_command, handle_generate_command, GenerateArgs,
};
use crime_report::clipboard::SystemClipboard;
use crime_report::config::{ReportPaths, Settings};
use crime_report::display::format_config;

#[derive(Parser)]
#[command(
    name = "crime-report",
    author = "Kaylee Beyene",
    version,
    about = "Fill in gang and family crime reports and render them for pasting",
    long_about = "crime-report collects the details of a gang or family incident \
                  (name, crime type, date and time, evidence links and charges) \
                  and renders them into a one-line header and a structured body, \
                  ready to paste into the reporting channel."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file (the terminal form logs nowhere otherwise)
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive form (default)
    #[command(alias = "ui")]
    Tui,

    /// Render a report from command-line flags
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// List the charge catalog
    Charges,

    /// List evidence keys and labels
    Fields {
        /// Only show one category (gang or family)
        #[arg(short = 'k', long)]
        category: Option<String>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings file with current values
        #[arg(long)]
        init: bool,
    },
}

/// RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
fn init_logging(verbose: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .with(filter)
                .try_init();
        }
        // Anything on stderr would draw over the alternate screen
        None if interactive => {}
        None => {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .try_init();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(cli.verbose, cli.log_file.as_deref(), interactive)?;

    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            crime_report::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Generate(args)) => {
            let mut clipboard = SystemClipboard::new();
            handle_generate_command(args, &paths, &settings, &mut clipboard)?;
        }
        Some(Commands::Charges) => {
            handle_charges_command()?;
        }
        Some(Commands::Fields { category }) => {
            handle_fields_command(category.as_deref())?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
            }
            print!("{}", format_config(&paths, &settings));
        }
    }

    Ok(())
}

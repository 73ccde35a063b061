use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stats_advisor::config::{LogFormat, LogLevel};
use stats_advisor::infrastructure::{init_logging, log_messages};
use stats_advisor::Application;
use tracing::info;

/// Exit status when at least one query was refused
const EXIT_REFUSED: u8 = 2;

/// Recommend inferential statistical tests for a research design
#[derive(Parser, Debug)]
#[command(name = "stats_advisor", version, about, long_about = None)]
struct Cli {
    /// Override the configured log level (logs go to stderr)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Override the configured log line format
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Write single-line JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a study design query (or an array of them) and print recommendations
    Recommend {
        /// JSON input file; reads stdin when omitted
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print every procedure the engine can recommend
    Procedures,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut app = Application::new().context("failed to load settings")?;
    let settings = app.settings_mut();
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        settings.logging.format = format;
    }
    if cli.compact {
        settings.output.pretty = false;
    }

    init_logging(&app.settings().logging)?;
    info!("{}", log_messages::application::STARTING);
    match cli.command {
        Command::Recommend { input } => {
            let report = match input {
                Some(path) => app
                    .recommend_file(&path)
                    .with_context(|| format!("failed to process {}", path.display()))?,
                None => app
                    .recommend_reader(io::stdin().lock())
                    .context("failed to process stdin")?,
            };
            println!("{}", app.render(&report)?);

            if report.has_refusals() {
                return Ok(ExitCode::from(EXIT_REFUSED));
            }
        }
        Command::Procedures => println!("{}", app.catalogue_json()?),
    }

    Ok(ExitCode::SUCCESS)
}

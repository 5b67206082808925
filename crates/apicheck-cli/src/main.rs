//! Apicheck CLI - structural presence checks for an OpenAPI document
//!
//! This is the main entry point for the Apicheck CLI. It loads the document,
//! runs the presence checks and prints the report. The exit status is 0 once
//! a report has been printed, whatever it contains, and non-zero when the
//! document could not be loaded or reported.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            println!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(document = ?cli.document))]
fn run(cli: &Cli) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    // Load configuration
    let config = {
        let _config_timer = Timer::new("config_loading");
        tracing::info!("Loading configuration");
        Config::load_with_file(cli.config.as_deref())?
    };

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    let format = cli.output.or(config.output.format).unwrap_or_default();
    let document = cli
        .document
        .clone()
        .unwrap_or_else(|| config.document_path());

    tracing::info!(
        document = %document.display(),
        format = ?format,
        verbosity = cli.verbosity_level(),
        "Executing validation"
    );

    let mut output = OutputWriter::new(format, use_color);
    handlers::handle_validate(&document, &mut output)
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}

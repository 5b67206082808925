//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API. Every
//! argument is optional: a bare `apicheck` validates the default document.

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Apicheck - structural presence checks for an OpenAPI document
///
/// Loads the document, reports its metadata and whether the expected paths,
/// schemas and security scheme are defined. Missing entries are warnings and
/// do not change the exit status.
#[derive(Parser, Debug)]
#[command(name = "apicheck", version, author, about, long_about = None)]
pub struct Cli {
    /// Path to the API description document (YAML or JSON)
    ///
    /// Defaults to the document named in --config, then docs/openapi.yaml.
    #[arg(value_name = "DOCUMENT")]
    pub document: Option<PathBuf>,

    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for the report
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable report lines
    #[default]
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
    /// YAML output
    Yaml,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::config::delimiter_to_byte;
use crate::report::ReportRegistry;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// PerfReport - employee performance reports from CSV files
///
/// Merges one or more CSV files of employee records and prints a
/// summary report.
///
/// Examples:
///   perfreport --files employees1.csv employees2.csv --report performance
///   perfreport --files data/ --report performance --format json
///   perfreport --files q1.csv --delimiter ';' --report performance
///   perfreport --list-reports
///   perfreport --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// CSV files (or directories of CSV files) to read
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 1..,
        required_unless_present_any = ["init_config", "list_reports"]
    )]
    pub files: Vec<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "NAME",
        help = report_help(),
        required_unless_present_any = ["init_config", "list_reports"]
    )]
    pub report: Option<String>,

    /// Output format (table, json, markdown)
    ///
    /// Defaults to the config file setting, or table.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Field delimiter of the input files
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .perfreport.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the available report names and exit
    #[arg(long)]
    pub list_reports: bool,

    /// Generate a default .perfreport.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

fn report_help() -> String {
    format!(
        "Report to generate. Available: {}",
        ReportRegistry::builtin().available_reports().join(", ")
    )
}

fn usage_error(kind: ErrorKind, message: impl std::fmt::Display) -> clap::Error {
    Args::command().error(kind, message)
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console table (default)
    #[default]
    Table,
    /// JSON document
    Json,
    /// Markdown document
    Markdown,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the report name (validated to be present for report runs).
    pub fn report_name(&self) -> &str {
        self.report.as_deref().unwrap_or("")
    }

    /// Validate the parsed arguments.
    ///
    /// Failures are usage errors, reported and exited the same way as
    /// clap's own parse errors.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.init_config || self.list_reports {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err(usage_error(
                ErrorKind::ArgumentConflict,
                "Cannot use both --verbose and --quiet",
            ));
        }

        if let Some(delimiter) = self.delimiter {
            delimiter_to_byte(delimiter)
                .map_err(|msg| usage_error(ErrorKind::InvalidValue, msg))?;
        }

        if self.report_name().trim().is_empty() {
            return Err(usage_error(
                ErrorKind::InvalidValue,
                "Report name must not be empty",
            ));
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

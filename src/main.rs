//! PerfReport - employee performance reports from CSV files
//!
//! Loads employee records from one or more delimited files, merges them
//! and prints a named summary report.
//!
//! Exit codes:
//!   0 - Success (including an empty dataset)
//!   1 - Runtime error (missing file, bad row, unknown report, config)
//!   2 - Invalid command-line usage (parse or validation failure)

mod analysis;
mod cli;
mod config;
mod error;
mod loader;
mod models;
mod report;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::{Config, DEFAULT_CONFIG_FILE};
use models::ReportDocument;
use report::ReportRegistry;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Usage errors exit with clap's status (2)
    if let Err(e) = args.validate() {
        e.exit();
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    let registry = ReportRegistry::builtin();

    if args.list_reports {
        for name in registry.available_reports() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    init_logging(&args, &config);

    debug!("PerfReport v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_report(&args, &config, &registry) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Report failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .perfreport.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings. Logs go to stderr.
fn init_logging(args: &Args, config: &Config) {
    let level = args.log_level(config.general.verbose);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load the inputs, run the requested report and emit it.
fn run_report(args: &Args, config: &Config, registry: &ReportRegistry) -> Result<()> {
    let options = loader::LoadOptions::try_from(&config.loader)?;

    info!("Loading {} input path(s)", args.files.len());
    for path in &args.files {
        debug!("Input: {}", path.display());
    }

    let records = loader::load(&args.files[..], &options)?;
    info!("Loaded {} record(s)", records.len());

    if records.is_empty() {
        println!("No data to analyze");
        return Ok(());
    }

    let name = args.report_name();
    info!("Generating '{}' report", name);
    let rows = registry.generate(name, &records)?;
    debug!("Report produced {} row(s)", rows.len());

    let sources = args
        .files
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let document = ReportDocument::new(name, sources, records.len(), rows);

    let output = match config.output.format {
        OutputFormat::Table => report::generate_table_report(&document),
        OutputFormat::Markdown => report::generate_markdown_report(&document),
        OutputFormat::Json => report::generate_json_report(&document)?,
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            // logging is not initialized yet
            eprintln!("Warning: ignoring {}: {:#}", DEFAULT_CONFIG_FILE, e);
            Ok(Config::default())
        }
    }
}

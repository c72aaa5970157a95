//! Command-line front end for the workout tracker.

pub mod cli;
pub mod error;
pub mod package;
pub mod runner;

use tracing_subscriber::EnvFilter;
use workout_tracker_core::report::report_line_schema;
use workout_tracker_core::{Config, ReportOptions, SensorPackage};

pub use cli::{Cli, OutputFormat, SchemaKind};
pub use error::{CliError, CliResult, PackageParseError};
pub use runner::{RunSummary, run};

/// Collect packages from the file and positional arguments, in that order.
/// Falls back to the demonstration packages when nothing was supplied.
pub fn collect_packages(cli: &Cli) -> CliResult<Vec<SensorPackage>> {
    let mut packages = match &cli.input {
        Some(path) => package::load_packages(path)?,
        None => Vec::new(),
    };
    for arg in &cli.packages {
        packages.push(package::parse_package(arg)?);
    }
    if packages.is_empty() && cli.input.is_none() {
        tracing::debug!("no packages supplied, using demo packages");
        packages = SensorPackage::demo();
    }
    Ok(packages)
}

/// Command-line flags can switch on options the environment left off.
pub fn report_options(cli: &Cli, config: &Config) -> ReportOptions {
    let mut options = config.report_options();
    options.swim_stroke_distance |= cli.swim_stroke_distance;
    options
}

/// Filter used when the configured log level does not parse.
pub const FALLBACK_LOG_FILTER: &str = "warn";

/// Build the log filter from the configured level.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LOG_FILTER))
}

/// Pretty-printed JSON schema for `--print-schema`.
pub fn render_schema(kind: SchemaKind) -> CliResult<String> {
    let schema = match kind {
        SchemaKind::Packages => SensorPackage::list_schema(),
        SchemaKind::Report => report_line_schema(),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

//! Drives each package through build, generate and format.

use std::io::Write;

use workout_tracker_core::{ReportOptions, SensorPackage, format_report, generate_with};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Outcome counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Render a single package as one output line.
pub fn render_package(
    package: &SensorPackage,
    options: &ReportOptions,
    format: OutputFormat,
) -> CliResult<String> {
    let record = package.build()?;
    let line = generate_with(&record, options);
    let rendered = match format {
        OutputFormat::Text => format_report(&line),
        OutputFormat::Json => serde_json::to_string(&line)?,
    };
    Ok(rendered)
}

/// Process packages independently. A failing package is logged and skipped;
/// write errors on `out` abort the run.
pub fn run<W: Write>(
    packages: &[SensorPackage],
    options: &ReportOptions,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<RunSummary> {
    let mut summary = RunSummary::default();
    for (index, package) in packages.iter().enumerate() {
        match render_package(package, options, format) {
            Ok(rendered) => {
                writeln!(out, "{rendered}")?;
                summary.succeeded += 1;
            }
            Err(e) => {
                tracing::error!(index, tag = %package.tag, "skipping package: {}", e);
                summary.failed += 1;
            }
        }
    }
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "processed packages"
    );
    Ok(summary)
}

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use workout_tracker_cli::{
    Cli, collect_packages, env_filter, render_schema, report_options, run,
};
use workout_tracker_core::Config;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env().context("reading configuration")?;

    // Logs go to stderr so stdout carries only report lines.
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&config.log_level))
        .init();
    tracing::debug!("workout-tracker: log filter: {}", config.log_level);

    if let Some(kind) = cli.print_schema {
        println!("{}", render_schema(kind).context("rendering schema")?);
        return Ok(ExitCode::SUCCESS);
    }

    let packages = collect_packages(&cli).context("reading sensor packages")?;
    let options = report_options(&cli, &config);

    let stdout = std::io::stdout();
    let summary = run(&packages, &options, cli.format, &mut stdout.lock())
        .context("writing reports")?;

    if summary.all_succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

//! gc - fetch the grading criteria of a course from the grading API

mod cli;
mod config;
mod error;
mod output;
mod presenter;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use presenter::{Notifier, TerminalNotifier};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(config::log_level(args.verbose));

    execute(args, &TerminalNotifier).await
}

/// Run the command, reporting any failure through `notifier` exactly once
async fn execute(args: Args, notifier: &dyn Notifier) -> ExitCode {
    match run(args, notifier).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "gc failed");
            presenter::report_failure(&e, notifier);
            ExitCode::FAILURE
        }
    }
}

/// Fetch and print; `Ok(false)` means the failure was already reported
async fn run(args: Args, notifier: &dyn Notifier) -> Result<bool, error::CliError> {
    let config = Config::from_args(args)?;
    let client = config.build_client()?;

    let Some(items) =
        presenter::present_grading_criteria(&client, config.course_id.clone(), notifier).await
    else {
        return Ok(false);
    };

    OutputFormatter::new(config.output).print(&config.course_id, &items)?;
    Ok(true)
}

/// Log to stderr; RUST_LOG overrides the verbosity flags
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

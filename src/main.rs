use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::process::ExitCode;
use webhook_sql_submitter::app_log;
use webhook_sql_submitter::{cli::Cli, ConfigManager, Runner};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILE: &str = "/tmp/webhook-sql-submitter.log";

fn init_logging() -> Result<()> {
    let log_path = std::env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // init_logging truncates the log file; --help and usage errors must not reach it
    let cli = Cli::parse();
    init_logging()?;

    let config = ConfigManager::load(&cli)?;

    app_log!(info, "Starting webhook SQL submitter");
    app_log!(info, "Generation endpoint: {}", config.generate_url());

    let mut runner = Runner::new(config.clone());

    if config.dry_run {
        runner.dry_run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let report = runner.run().await;
    let status = report.exit_status(config.fail_on_error);

    if config.exit_after_run {
        app_log!(info, "Exiting after run with status {}", status);
        std::process::exit(i32::from(status));
    }

    Ok(ExitCode::from(status))
}

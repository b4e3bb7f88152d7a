//! padelscan CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use padelscan_cli::cli::Cli;
use padelscan_cli::error::CliResult;
use padelscan_cli::{config, render};
use padelscan_core::{DurationFilter, SearchQuery, SearchWindow};
use padelscan_providers::Aggregator;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let providers_config = config::load(cli.config.as_deref())?;

    let query = SearchQuery::new(
        cli.date.unwrap_or_else(|| chrono::Local::now().date_naive()),
        SearchWindow::new(cli.window_from, cli.window_to),
        DurationFilter::from_minutes(cli.durations.iter().copied()),
    );

    let aggregator = Aggregator::from_config(&providers_config);
    tracing::debug!(providers = aggregator.provider_count(), "starting search");

    let report = aggregator.search(&query).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_text(&report));
    }

    // provider errors are part of the report, not a process failure
    Ok(())
}

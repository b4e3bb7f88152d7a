//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use padelscan_core::ClockTime;

/// padelscan - compare court availability across booking platforms
#[derive(Debug, Parser)]
#[command(name = "padelscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "PADELSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Date to search (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Start of the window; slots must begin exactly at this time
    #[arg(long = "from", value_name = "HH:MM", default_value = "18:00")]
    pub window_from: ClockTime,

    /// End of the window; slots must end at or before this time
    #[arg(long = "to", value_name = "HH:MM", default_value = "19:30")]
    pub window_to: ClockTime,

    /// Accepted session duration in minutes (repeatable). Non-positive
    /// values are discarded; if none remain, any duration is accepted
    #[arg(
        long = "duration",
        short = 'd',
        value_name = "MIN",
        action = clap::ArgAction::Append,
        default_values_t = vec![90]
    )]
    pub durations: Vec<i64>,

    /// Output the raw report as JSON
    #[arg(long)]
    pub json: bool,
}

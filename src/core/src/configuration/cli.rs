use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command-line arguments of the `droplet` binary.
#[derive(Parser, Debug)]
#[command(name = "droplet")]
#[command(version)]
#[command(about = "Log the water you drink and see how much you had today")]
pub struct Args {
    /// TOML configuration file
    #[arg(long, short, env = "DROPLET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the records file, overrides the configuration file
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Log a drink
    Drink {
        /// Volume in ml, defaults to `default_volume` from the configuration
        #[arg(long, short, value_parser = clap::value_parser!(i64).range(1..))]
        volume: Option<i64>,
    },
    /// Show today's summary and every record
    List,
    /// Delete the record with the given id
    Delete { id: i64 },
    /// Delete every record
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// Show the summary for one date
    Summary {
        /// Date as YYYY-MM-DD, defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<String>,
    },
    /// Show per-day totals, newest first
    History,
}

/// Accepts a calendar date and normalises it to the stored `YYYY-MM-DD` form.
fn parse_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("expected a date like 2024-01-31: {}", e))
}

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_LISTING_URL: &str = "https://sports.caliente.mx/es_MX/Tenis";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Where to write the match table
    #[arg(long, global = true, default_value = "matches.xlsx")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Xlsx)]
    pub format: OutputFormat,

    /// JSON file overriding the class tokens and round keywords
    #[arg(long, global = true)]
    pub rules_file: Option<PathBuf>,

    /// Day the listing is for (YYYY-MM-DD); recorded but not filtered on yet
    #[arg(long, global = true)]
    pub target_date: Option<NaiveDate>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load a live listing page
    Fetch {
        /// Listing page to load
        #[arg(long, default_value = DEFAULT_LISTING_URL)]
        url: String,

        /// Seconds the page may take to load
        #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u64).range(3..=40))]
        load_secs: u64,
    },
    /// Parse saved HTML files
    File {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Parse markup pasted on stdin
    Paste,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Json,
}

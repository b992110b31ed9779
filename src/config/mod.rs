use crate::config::cli::Args;
use crate::domain::ExtractionRules;
use crate::error::Result;
use reqwest::Client;
use tracing::{info, Level};

pub mod cli;

pub use cli::{Command, OutputFormat};

pub struct Config {
    pub args: Args,
    pub rules: ExtractionRules,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let rules = match &args.rules_file {
            Some(path) => ExtractionRules::load(path)?,
            None => ExtractionRules::default(),
        };

        // Per-request timeouts come from the load budget.
        let http_client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        info!("Configuration loaded");
        Ok(Self {
            args,
            rules,
            http_client,
        })
    }
}

impl Args {
    /// Unknown levels fall back to `info`.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

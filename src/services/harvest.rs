use crate::config::{Command, Config};
use crate::domain::{MatchCandidate, MatchSet};
use crate::error::Result;
use crate::infrastructure::{read_html_file, read_pasted_html, HttpPageFetcher, PageFetcher};
use crate::services::export::write_output;
use crate::services::extraction::Extractor;
use crate::services::filtering::filter_by_target_date;
use crate::services::ranking::rank;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    pub found: usize,
    /// `None` when nothing was found and no file was written.
    pub written: Option<PathBuf>,
}

pub struct HarvestService<F = HttpPageFetcher> {
    config: Config,
    extractor: Extractor,
    fetcher: F,
}

impl HarvestService<HttpPageFetcher> {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(config.http_client.clone());
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: PageFetcher> HarvestService<F> {
    pub fn with_fetcher(config: Config, fetcher: F) -> Result<Self> {
        let extractor = Extractor::new(&config.rules)?;
        Ok(Self {
            config,
            extractor,
            fetcher,
        })
    }

    pub async fn run(&self) -> Result<HarvestReport> {
        info!("Starting match extraction");

        let rows = self.collect().await?;
        if rows.is_empty() {
            warn!("No matches found, nothing written");
            return Ok(HarvestReport {
                found: 0,
                written: None,
            });
        }

        let written = write_output(&rows, self.config.args.format, &self.config.args.output)?;
        Ok(HarvestReport {
            found: rows.len(),
            written: Some(written),
        })
    }

    /// Acquires markup for the configured mode and returns the ranked,
    /// de-duplicated matches.
    pub async fn collect(&self) -> Result<Vec<MatchCandidate>> {
        let rows = match &self.config.args.command {
            Command::Fetch { url, load_secs } => {
                let html = self.fetch_live(url, Duration::from_secs(*load_secs)).await?;
                self.extractor.extract(&html)
            }
            Command::File { paths } => self.extract_files(paths)?,
            Command::Paste => {
                let html = read_pasted_html(std::io::stdin().lock())?;
                self.extractor.extract(&html)
            }
        };
        info!("Extraction completed: {} unique matches", rows.len());

        let rows = filter_by_target_date(rows, self.config.args.target_date);
        Ok(rank(rows))
    }

    async fn fetch_live(&self, url: &str, load_budget: Duration) -> Result<String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Loading {}", url));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = self.fetcher.fetch_rendered_html(url, load_budget).await;
        spinner.finish_and_clear();

        let html = result?;
        info!("Loaded {} ({} bytes)", url, html.len());
        Ok(html)
    }

    /// Files are parsed in parallel and merged in argument order.
    fn extract_files(&self, paths: &[PathBuf]) -> Result<Vec<MatchCandidate>> {
        let extractor = &self.extractor;
        let per_file = paths
            .par_iter()
            .map(|path| extract_file(extractor, path))
            .collect::<Result<Vec<_>>>()?;

        Ok(per_file.into_iter().flatten().collect::<MatchSet>().into_vec())
    }
}

fn extract_file(extractor: &Extractor, path: &Path) -> Result<Vec<MatchCandidate>> {
    let html = read_html_file(path)?;
    let rows = extractor.extract(&html);
    info!("{:?}: {} matches", path, rows.len());
    Ok(rows)
}

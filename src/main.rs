use clap::Parser;
use matchsheet::config::cli::Args;
use matchsheet::config::Config;
use matchsheet::error::Result;
use matchsheet::services::HarvestService;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .init();

    let config = Config::from_args(args)?;
    let harvest = HarvestService::new(config)?;
    let report = harvest.run().await?;

    match report.written {
        Some(path) => info!("Exported {} matches to {:?}", report.found, path),
        None => info!("No matches to export"),
    }
    Ok(())
}

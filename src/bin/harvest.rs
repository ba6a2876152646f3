// src/bin/harvest.rs
use rail_scrape::cli;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::init_logging()?;
    cli::run_harvest().await?;
    Ok(())
}

// src/cli.rs
// Entry points behind the two binaries. No flags: sources, paths and
// timeouts all come from `config::consts`.

use std::path::Path;

use chrono::Local;
use log::LevelFilter;

use crate::catalog::CatalogFetcher;
use crate::config::consts::{BROWSER_HEADLESS, BROWSER_USER_AGENT, DATA_DIR, EDGES_FILE, LOG_FILE, WEBDRIVER_URL};
use crate::config::{CatalogKind, HarvestOptions};
use crate::csv::save_stations_csv;
use crate::data::Train;
use crate::driver::{DriverConfig, FormDriver, WebDriverBrowser};
use crate::error::Result;
use crate::progress::ConsoleProgress;
use crate::store::{self, JsonStore};
use crate::{edges, harvest, logger};

pub fn init_logging() -> Result<()> {
    logger::init(&Path::new(DATA_DIR).join(LOG_FILE), LevelFilter::Info)
}

/// Fetch every catalog feed. Any failure here is fatal.
pub async fn run_catalogs() -> Result<()> {
    let today = Local::now().date_naive();
    let fetcher = CatalogFetcher::new(DATA_DIR)?;

    let national = fetcher.stations(CatalogKind::IndianRailwaysStations, today).await?;
    println!("Total stations found from indianrailways: {}", national.len());
    let csv_path = CatalogKind::IndianRailwaysStations.csv_path(fetcher.data_dir());
    if let Err(e) = save_stations_csv(&csv_path, &national) {
        log::error!("Could not write {}: {e}", csv_path.display());
    }

    let stations = fetcher.stations(CatalogKind::Stations, today).await?;
    println!("Total stations found: {}", stations.len());

    let trains = fetcher.trains(today).await?;
    println!("Total trains found: {}", trains.len());
    Ok(())
}

/// Train catalog from the last catalog run, or a fresh download.
async fn load_or_fetch_trains(data_dir: &Path) -> Result<Vec<Train>> {
    if CatalogKind::Trains.json_path(data_dir).exists() {
        return store::load_trains(data_dir);
    }
    log::info!("No saved train list, downloading");
    CatalogFetcher::new(data_dir)?.trains(Local::now().date_naive()).await
}

/// Harvest every train's schedule through the enquiry site.
pub async fn run_harvest() -> Result<()> {
    let opts = HarvestOptions::default();
    let trains = load_or_fetch_trains(&opts.data_dir).await?;

    let browser = WebDriverBrowser::launch(WEBDRIVER_URL, BROWSER_USER_AGENT, BROWSER_HEADLESS).await?;
    let mut driver = FormDriver::new(browser, DriverConfig::default());

    println!("Initialising schedule page...");
    let outcome = match driver.initialize().await {
        Ok(()) => {
            println!("Ready!\n");
            let mut store = JsonStore::new(&opts.data_dir);
            let mut progress = ConsoleProgress::default();
            harvest::run(&mut driver, &trains, &mut store, &opts, Some(&mut progress)).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = driver.into_browser().quit().await {
        log::warn!("Closing browser: {e}");
    }
    let result = outcome?;

    match store::load_stations(&opts.data_dir, CatalogKind::Stations) {
        Ok(stations) => {
            let valid = edges::valid_codes(&stations);
            let all = edges::collect_edges(&result.schedules, &valid);
            let path = opts.data_dir.join(EDGES_FILE);
            store::write_json(&path, &all)?;
            println!("Edges            : {}", all.len());
        }
        Err(e) => log::warn!("No station list for edges: {e}"),
    }
    Ok(())
}

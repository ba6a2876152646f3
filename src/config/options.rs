// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::consts::*;

/// Which static feed a record list came from. Also decides the file stem
/// the list is saved under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// National GIS layer: passenger, freight-only, halt, proposed stations, sidings.
    IndianRailwaysStations,
    /// Passenger stations and halts known to the enquiry system.
    Stations,
    Trains,
}

impl CatalogKind {
    pub fn stem(&self) -> &'static str {
        match self {
            CatalogKind::IndianRailwaysStations => "indianrailways_stations",
            CatalogKind::Stations => "stations",
            CatalogKind::Trains => "trains",
        }
    }

    /// Source URL for the feed as published on `date`.
    pub fn url(&self, date: NaiveDate) -> String {
        let stamp = date.format("%Y%m%d");
        match self {
            CatalogKind::IndianRailwaysStations => s!(INDIANRAILWAYS_STATIONS_URL),
            CatalogKind::Stations => {
                format!("{MNTES_BASE_URL}{MNTES_STATIONS_PATH}?v={stamp}{STATIONS_VERSION_HOUR}")
            }
            CatalogKind::Trains => {
                format!("{MNTES_BASE_URL}{MNTES_TRAINS_PATH}?v={stamp}{TRAINS_VERSION_HOUR}")
            }
        }
    }

    pub fn json_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.stem()))
    }

    pub fn csv_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.csv", self.stem()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Where every JSON artifact is written.
    pub data_dir: PathBuf,
    /// Processed trains (successes + failures) between progress checkpoints.
    pub checkpoint_every: usize,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            checkpoint_every: CHECKPOINT_EVERY,
        }
    }
}

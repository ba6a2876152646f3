// src/store.rs
use std::{fs, path::{Path, PathBuf}};

use serde::{Serialize, de::DeserializeOwned};

use crate::config::consts::{FAILED_FILE, PROGRESS_FILE, SCHEDULES_FILE};
use crate::config::CatalogKind;
use crate::data::{ScheduleMap, Station, Train};
use crate::error::Result;
use crate::file::write_replace;

/// Pretty JSON (two-space indent, non-ASCII kept as is), fully replacing `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    write_replace(path, text.as_bytes())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Save a catalog record list under its kind's file name.
pub fn save_catalog<T: Serialize>(dir: &Path, kind: CatalogKind, records: &[T]) -> Result<PathBuf> {
    let path = kind.json_path(dir);
    write_json(&path, records)?;
    log::info!("Saved {} records to {}", records.len(), path.display());
    Ok(path)
}

pub fn load_trains(dir: &Path) -> Result<Vec<Train>> {
    read_json(&CatalogKind::Trains.json_path(dir))
}

pub fn load_stations(dir: &Path, kind: CatalogKind) -> Result<Vec<Station>> {
    read_json(&kind.json_path(dir))
}

/// Where harvest results go. The harvest loop writes through this so tests
/// can observe checkpoints without touching disk.
pub trait ScheduleStore {
    /// Full snapshot of everything collected so far.
    fn save_progress(&mut self, schedules: &ScheduleMap) -> Result<()>;

    /// Final map, plus the failure list when it is not empty.
    fn save_final(&mut self, schedules: &ScheduleMap, failed: &[String]) -> Result<()>;
}

/// `schedules_progress.json`, `schedules.json`, `failed_trains.json` in one directory.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn progress_path(&self) -> PathBuf { self.dir.join(PROGRESS_FILE) }
    pub fn schedules_path(&self) -> PathBuf { self.dir.join(SCHEDULES_FILE) }
    pub fn failed_path(&self) -> PathBuf { self.dir.join(FAILED_FILE) }

    pub fn load_schedules(&self) -> Result<ScheduleMap> {
        read_json(&self.schedules_path())
    }
}

impl ScheduleStore for JsonStore {
    fn save_progress(&mut self, schedules: &ScheduleMap) -> Result<()> {
        write_json(&self.progress_path(), schedules)
    }

    fn save_final(&mut self, schedules: &ScheduleMap, failed: &[String]) -> Result<()> {
        write_json(&self.schedules_path(), schedules)?;
        log::info!("Saved {} schedules to {}", schedules.len(), self.schedules_path().display());
        if !failed.is_empty() {
            write_json(&self.failed_path(), failed)?;
            log::info!("Saved {} failed trains to {}", failed.len(), self.failed_path().display());
        }
        Ok(())
    }
}

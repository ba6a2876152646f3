// src/catalog.rs
//! Station and train catalogs: fetch a feed, parse it, save it.
//!
//! Saving is best-effort. The returned list is what the caller works with,
//! so a failed write is logged and the records are returned anyway.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::CatalogKind;
use crate::core::net;
use crate::data::{Station, Train};
use crate::error::Result;
use crate::specs::{stations, trains};
use crate::store;

pub struct CatalogFetcher {
    client: reqwest::Client,
    data_dir: PathBuf,
}

impl CatalogFetcher {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self { client: net::client()?, data_dir: data_dir.into() })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Download `url` as a station layer feed and save it as `kind`.
    pub async fn stations_from(&self, kind: CatalogKind, url: &str) -> Result<Vec<Station>> {
        log::info!("Downloading {} data...", kind.stem());
        let body = net::http_get(&self.client, url).await?;
        let list = stations::parse_station_feed(&body)?;
        self.persist(kind, &list);
        Ok(list)
    }

    pub async fn trains_from(&self, url: &str) -> Result<Vec<Train>> {
        log::info!("Downloading {} data...", CatalogKind::Trains.stem());
        let body = net::http_get(&self.client, url).await?;
        let list = trains::parse_train_feed(&body)?;
        self.persist(CatalogKind::Trains, &list);
        Ok(list)
    }

    /// Station feed of `kind` as published on `date`.
    pub async fn stations(&self, kind: CatalogKind, date: NaiveDate) -> Result<Vec<Station>> {
        self.stations_from(kind, &kind.url(date)).await
    }

    pub async fn trains(&self, date: NaiveDate) -> Result<Vec<Train>> {
        self.trains_from(&CatalogKind::Trains.url(date)).await
    }

    fn persist<T: Serialize>(&self, kind: CatalogKind, records: &[T]) {
        if let Err(e) = store::save_catalog(&self.data_dir, kind, records) {
            log::error!("Could not save {} catalog: {e}", kind.stem());
        }
    }
}

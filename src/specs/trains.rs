// src/specs/trains.rs
//! Train list feed: a script with `arrTrainList = ["12951- MUMBAI RAJDHANI", ...]`.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::TRAIN_LIST_MARKER;
use crate::data::Train;
use crate::error::{HarvestError, Result};

fn list_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pat = format!(r"(?s){}\s*=\s*\[(.*?)\]", regex::escape(TRAIN_LIST_MARKER));
        Regex::new(&pat).expect("train list pattern")
    })
}

fn quoted_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""(.*?)""#).expect("quoted string pattern"))
}

/// Extract `(number, name)` pairs from the script body, in array order.
/// Entries without a `"- "` separator are dropped.
pub fn parse_train_feed(body: &str) -> Result<Vec<Train>> {
    let caps = list_re().captures(body).ok_or_else(|| {
        HarvestError::CatalogFormat(format!("{TRAIN_LIST_MARKER} not found in response"))
    })?;
    let array = caps.get(1).map_or("", |m| m.as_str());

    let trains = quoted_re()
        .captures_iter(array)
        .filter_map(|c| c.get(1))
        .filter_map(|m| split_entry(m.as_str()))
        .collect();
    Ok(trains)
}

/// "00001- TRAIN NAME" → Train { "00001", "TRAIN NAME" }
fn split_entry(entry: &str) -> Option<Train> {
    let (number, name) = entry.split_once("- ")?;
    Some(Train { number: s!(number.trim()), name: s!(name.trim()) })
}

// src/data.rs
//! Records produced by the scraper. Field names on the wire match the JSON
//! artifacts other tools already consume, so the serde renames matter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One feature of a station GIS layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "Station", default)]
    pub name: String,
    #[serde(rename = "StationCode", default)]
    pub code: String,
    /// Map coordinates, copied as published (usually numbers, sometimes text or null).
    #[serde(rename = "ctrX", default)]
    pub x: Value,
    #[serde(rename = "ctrY", default)]
    pub y: Value,
    /// Classification of the enclosing layer, copied as published.
    #[serde(default)]
    pub layer_depth: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    /// Kept as text: numbers like "00001" are significant.
    #[serde(rename = "TrainNo")]
    pub number: String,
    #[serde(rename = "TrainName")]
    pub name: String,
}

/// One row of a schedule table, values exactly as rendered.
/// `arrival` is "--" (or empty) at the origin, `departure` at the terminus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub sr: String,
    pub station_name: String,
    pub station_code: String,
    pub day: String,
    pub arrival: String,
    pub departure: String,
    pub halt: String,
    pub distance_km: String,
}

/// Header block of a schedule page. Rows the page did not have stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_run: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub train_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unreserved_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_ticket: Option<String>,
}

impl TrainInfo {
    pub fn is_empty(&self) -> bool {
        *self == TrainInfo::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub train_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<TrainInfo>,
    pub stops: Vec<Stop>,
}

/// Train number → schedule. Sorted by train number so repeated runs produce
/// byte-identical files.
pub type ScheduleMap = BTreeMap<String, Schedule>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HarvestResult {
    /// Only trains that yielded at least one stop.
    pub schedules: ScheduleMap,
    /// Train numbers whose lookup failed, in catalog order.
    pub failed: Vec<String>,
}

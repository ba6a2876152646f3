// src/csv.rs
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::data::Station;
use crate::error::Result;
use crate::file::ensure_parent;

pub const STATION_HEADERS: [&str; 5] = ["Station", "StationCode", "ctrX", "ctrY", "layer_depth"];

/// Coordinates and `layer_depth` are free-form JSON; strings go out bare,
/// null as empty.
fn value_cell(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write stations with a header row to any writer.
pub fn write_stations<W: Write>(w: W, stations: &[Station]) -> Result<()> {
    let mut out = ::csv::Writer::from_writer(w);
    out.write_record(STATION_HEADERS)?;
    for st in stations {
        out.write_record([
            st.name.clone(),
            st.code.clone(),
            value_cell(&st.x),
            value_cell(&st.y),
            value_cell(&st.layer_depth),
        ])?;
    }
    out.flush()?;
    Ok(())
}

pub fn save_stations_csv(path: &Path, stations: &[Station]) -> Result<()> {
    ensure_parent(path)?;
    let file = std::fs::File::create(path)?; // truncate/overwrite
    write_stations(std::io::BufWriter::new(file), stations)?;
    log::info!("Saved {} stations to {}", stations.len(), path.display());
    Ok(())
}

// src/specs/stations.rs
//! Station GIS feed: `{"layers": [{"depth": .., "features": [{"ctrX", "ctrY", "attributes": {..}}]}]}`.

use serde::Deserialize;
use serde_json::Value;

use crate::data::Station;
use crate::error::{HarvestError, Result};

#[derive(Deserialize)]
struct Feed {
    layers: Vec<Layer>,
}

#[derive(Deserialize)]
struct Layer {
    #[serde(default)]
    depth: Value,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(rename = "ctrX", default)]
    x: Value,
    #[serde(rename = "ctrY", default)]
    y: Value,
    #[serde(default)]
    attributes: Attributes,
}

#[derive(Deserialize, Default)]
struct Attributes {
    #[serde(rename = "Station", default)]
    station: Value,
    #[serde(rename = "StationCod", default)]
    code: Value,
}

/// Attribute values are not always strings; numbers keep their JSON text,
/// null and missing become "".
fn attr_text(v: Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Flatten every feature of every layer into a `Station`, in feed order.
pub fn parse_station_feed(body: &str) -> Result<Vec<Station>> {
    let feed: Feed = serde_json::from_str(body)
        .map_err(|e| HarvestError::CatalogFormat(format!("station layers: {e}")))?;

    let mut stations = Vec::new();
    for layer in feed.layers {
        for f in layer.features {
            stations.push(Station {
                name: attr_text(f.attributes.station),
                code: attr_text(f.attributes.code),
                x: f.x,
                y: f.y,
                layer_depth: layer.depth.clone(),
            });
        }
    }
    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_default_to_empty() {
        let body = r#"{"layers":[{"depth":3,"features":[{"ctrX":1.5,"ctrY":2.5}]}]}"#;
        let st = parse_station_feed(body).unwrap();
        assert_eq!(st.len(), 1);
        assert_eq!(st[0].name, "");
        assert_eq!(st[0].code, "");
        assert_eq!(st[0].x, 1.5);
        assert_eq!(st[0].layer_depth, 3);
    }

    #[test]
    fn layer_without_features_contributes_nothing() {
        let body = r#"{"layers":[{"depth":"halt"}]}"#;
        assert!(parse_station_feed(body).unwrap().is_empty());
    }

    #[test]
    fn missing_layers_is_format_error() {
        let err = parse_station_feed(r#"{"features":[]}"#).unwrap_err();
        assert!(matches!(err, HarvestError::CatalogFormat(_)));
    }

    #[test]
    fn mixed_type_features_are_kept() {
        let body = r#"{"layers":[{"depth":1,"features":[
            {"ctrX":72.82,"ctrY":18.97,"attributes":{"Station":"MUMBAI CENTRAL","StationCod":"MMCT"}},
            {"ctrX":"77.2","ctrY":null,"attributes":{"Station":"NEW DELHI","StationCod":1234}},
            {"ctrX":{"v":1},"attributes":{"Station":null,"StationCod":true}}
        ]}]}"#;
        let st = parse_station_feed(body).unwrap();
        assert_eq!(st.len(), 3);

        assert_eq!(st[1].x, "77.2");
        assert_eq!(st[1].y, Value::Null);
        assert_eq!(st[1].code, "1234");
        assert_eq!(st[1].name, "NEW DELHI");

        assert_eq!(st[2].x, serde_json::json!({"v": 1}));
        assert_eq!(st[2].name, "");
        assert_eq!(st[2].code, "true");
    }
}

// tests/store_roundtrip.rs
use std::fs;
use std::path::PathBuf;

use rail_scrape::data::{Schedule, ScheduleMap, Stop, TrainInfo};
use rail_scrape::store::{JsonStore, ScheduleStore, read_json, write_json};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("rail_scrape_rt_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn stop(sr: &str, name: &str, code: &str, arr: &str, dep: &str, km: &str) -> Stop {
    Stop {
        sr: sr.into(),
        station_name: name.into(),
        station_code: code.into(),
        day: "1".into(),
        arrival: arr.into(),
        departure: dep.into(),
        halt: "".into(),
        distance_km: km.into(),
    }
}

fn sample() -> ScheduleMap {
    let mut map = ScheduleMap::new();
    map.insert(
        "12951".into(),
        Schedule {
            train_name: "MUMBAI RAJDHANI".into(),
            info: Some(TrainInfo {
                route: Some("MUMBAI CENTRAL - NEW DELHI".into()),
                travel_time: Some("15:32 hrs".into()),
                days_of_run: Some("Daily".into()),
                ..Default::default()
            }),
            stops: vec![
                stop("1", "MUMBAI CENTRAL", "MMCT", "--", "17:00", "0"),
                stop("2", "BORIVALI", "BVI", "17:22", "17:24", "30"),
                stop("3", "NEW DELHI", "NDLS", "08:32", "--", "1386"),
            ],
        },
    );
    map.insert(
        "06001".into(),
        Schedule {
            train_name: "SPECIAL – ತುಮಕೂರು".into(),
            info: None,
            stops: vec![stop("1", "TUMAKURU", "TK", "--", "06:00", "0")],
        },
    );
    map
}

#[test]
fn schedule_map_survives_json() {
    let dir = tmp_dir("map");
    let path = dir.join("schedules.json");
    let map = sample();

    write_json(&path, &map).unwrap();
    let back: ScheduleMap = read_json(&path).unwrap();
    assert_eq!(back, map);

    let stops: Vec<_> = back["12951"].stops.iter().map(|s| s.station_code.as_str()).collect();
    assert_eq!(stops, vec!["MMCT", "BVI", "NDLS"]);
}

#[test]
fn json_store_final_and_progress_files() {
    let dir = tmp_dir("store");
    let mut store = JsonStore::new(&dir);
    let map = sample();

    store.save_progress(&map).unwrap();
    store.save_final(&map, &["22222".to_string()]).unwrap();

    let progress: ScheduleMap = read_json(&store.progress_path()).unwrap();
    assert_eq!(progress, map);
    assert_eq!(store.load_schedules().unwrap(), map);

    let text = fs::read_to_string(store.schedules_path()).unwrap();
    assert!(text.contains("ತುಮಕೂರು"));
    assert!(!text.contains("\"info\": null"));

    let failed: Vec<String> = read_json(&store.failed_path()).unwrap();
    assert_eq!(failed, vec!["22222".to_string()]);
}

// src/edges.rs
//! Station adjacency from harvested schedules: consecutive stops become a
//! directed edge when both codes are known stations.

use std::collections::{BTreeSet, HashSet};

use crate::data::{ScheduleMap, Station, Stop};

pub type Edge = (String, String);

pub fn valid_codes(stations: &[Station]) -> HashSet<String> {
    stations
        .iter()
        .filter(|s| !s.code.is_empty())
        .map(|s| s.code.clone())
        .collect()
}

pub fn build_edges(stops: &[Stop], valid: &HashSet<String>) -> BTreeSet<Edge> {
    stops
        .windows(2)
        .filter(|w| valid.contains(&w[0].station_code) && valid.contains(&w[1].station_code))
        .map(|w| (w[0].station_code.clone(), w[1].station_code.clone()))
        .collect()
}

/// Union of the edges of every schedule.
pub fn collect_edges(schedules: &ScheduleMap, valid: &HashSet<String>) -> BTreeSet<Edge> {
    schedules
        .values()
        .flat_map(|sched| build_edges(&sched.stops, valid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(code: &str) -> Stop {
        Stop { station_code: s!(code), ..Default::default() }
    }

    #[test]
    fn unknown_codes_break_the_chain() {
        let valid: HashSet<String> = ["A", "B", "D"].into_iter().map(String::from).collect();
        let stops = vec![stop("A"), stop("B"), stop("X"), stop("D"), stop("A")];
        let edges = build_edges(&stops, &valid);
        let expect: BTreeSet<Edge> = [(s!("A"), s!("B")), (s!("D"), s!("A"))].into_iter().collect();
        assert_eq!(edges, expect);
    }

    #[test]
    fn single_stop_has_no_edges() {
        let valid: HashSet<String> = [s!("A")].into_iter().collect();
        assert!(build_edges(&[stop("A")], &valid).is_empty());
    }
}

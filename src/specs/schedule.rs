// src/specs/schedule.rs
//! Scraping *spec* for a rendered train schedule page.
//!
//! The page carries (among layout tables) two tables we care about:
//! - a **header table** with "Travel Time", "Days of Run", class and fare rows;
//! - a **stop table** whose first row is the column header ("Station", …),
//!   followed by one row per stop: `Sr | Station name/code | Day | Arr/Dep | Halt | Distance`.
//!
//! Name/code and arrival/departure are not separate cells: each pair sits in
//! two `<font>` elements inside one cell.
//!
//! A page with no stop table is a train without a published schedule and
//! yields an empty list.

use scraper::{ElementRef, Html};

use crate::core::html::{self, cell_text, cells, nested_texts, rows, text_of};
use crate::core::sanitize::{after, between, strip_label};
use crate::data::{Stop, TrainInfo};

const MIN_STOP_CELLS: usize = 6;

/// Parse one rendered page into its header block and ordered stops.
pub fn parse_schedule(doc: &str) -> (TrainInfo, Vec<Stop>) {
    let page = Html::parse_document(doc);
    let mut info = TrainInfo::default();
    let mut stops = Vec::new();

    for table in page.select(html::table()) {
        let table_rows = rows(table);
        let Some(first) = table_rows.first() else { continue };

        let full = html::raw_text(table);
        if full.contains("Days of Run") && full.contains("Travel Time") {
            info = parse_train_info(&table_rows);
        } else if text_of(*first).contains("Station") {
            stops = parse_stops(&table_rows[1..]);
        }
    }

    (info, stops)
}

/// Header rows are matched by label; each label owns the two cells of its row.
fn parse_train_info(table_rows: &[ElementRef<'_>]) -> TrainInfo {
    let mut info = TrainInfo::default();

    for row in table_rows {
        let tds = cells(*row);
        let text = text_of(*row);

        if text.contains("Travel Time") {
            info.route = Some(cell_text(&tds, 0));
            info.travel_time = Some(strip_label(&cell_text(&tds, 1), "Travel Time:"));
        } else if text.contains("Days of Run") {
            info.days_of_run = Some(between(&text, "Days of Run:", "Type:"));
            info.train_type = Some(after(&text, "Type:"));
        } else if text.contains("Reserved Class of Travel") {
            info.reserved_class = Some(strip_label(&cell_text(&tds, 0), "Reserved Class of Travel:"));
            info.unreserved_class = Some(strip_label(&cell_text(&tds, 1), "Un-Reserved Class :"));
        } else if text.contains("Un-Reserved Fare") {
            info.fare_category = Some(strip_label(&cell_text(&tds, 0), "Un-Reserved Fare Category :"));
            info.season_ticket =
                Some(strip_label(&cell_text(&tds, 1), "Un-Reserved Season Ticket (MST) :"));
        }
    }

    info
}

fn parse_stops(body_rows: &[ElementRef<'_>]) -> Vec<Stop> {
    let mut stops = Vec::with_capacity(body_rows.len());

    for row in body_rows {
        let tds = cells(*row);
        if tds.len() < MIN_STOP_CELLS {
            continue; // spacer / notes row
        }

        let mut station = nested_texts(tds[1]).into_iter();
        let mut times = nested_texts(tds[3]).into_iter();

        stops.push(Stop {
            sr: cell_text(&tds, 0),
            station_name: station.next().unwrap_or_default(),
            station_code: station.next().unwrap_or_default(),
            day: cell_text(&tds, 2),
            arrival: times.next().unwrap_or_default(),
            departure: times.next().unwrap_or_default(),
            halt: cell_text(&tds, 4),
            distance_km: cell_text(&tds, 5),
        });
    }

    stops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_row(sr: &str, name: &str, code: &str, arr: &str, dep: &str, km: &str) -> String {
        format!(
            "<tr><td>{sr}</td><td><font>{name}</font><br><font>{code}</font></td><td>1</td>\
             <td><font>{arr}</font><br><font>{dep}</font></td><td>2 min</td><td>{km}</td></tr>"
        )
    }

    fn page(tables: &str) -> String {
        format!("<html><head><title>Schedule</title></head><body>{tables}</body></html>")
    }

    const HEADER: &str = "<tr><td>Sr</td><td>Station</td><td>Day</td><td>Arr/Dep</td><td>Halt</td><td>Dist</td></tr>";

    #[test]
    fn short_rows_are_skipped_in_order() {
        let body = format!(
            "<table>{HEADER}{}{}<tr><td colspan=6>Note: platform may change</td></tr>{}</table>",
            stop_row("1", "MUMBAI CENTRAL", "MMCT", "--", "17:00", "0"),
            stop_row("2", "BORIVALI", "BVI", "17:22", "17:24", "30"),
            stop_row("3", "NEW DELHI", "NDLS", "08:32", "--", "1386"),
        );
        let (_, stops) = parse_schedule(&page(&body));

        let codes: Vec<_> = stops.iter().map(|s| s.station_code.as_str()).collect();
        assert_eq!(codes, vec!["MMCT", "BVI", "NDLS"]);
        assert_eq!(stops[0].arrival, "--");
        assert_eq!(stops[0].departure, "17:00");
        assert_eq!(stops[2].distance_km, "1386");
        assert_eq!(stops[1].halt, "2 min");
        assert_eq!(stops[1].day, "1");
    }

    #[test]
    fn no_station_table_means_no_stops() {
        let body = "<table><tr><td>Train No. not found</td></tr></table>";
        let (info, stops) = parse_schedule(&page(body));
        assert!(stops.is_empty());
        assert!(info.is_empty());
    }

    #[test]
    fn missing_fonts_give_empty_strings() {
        let body = format!(
            "<table>{HEADER}<tr><td>1</td><td>PLAIN TEXT</td><td>1</td><td><font>10:00</font></td><td></td><td>0</td></tr></table>"
        );
        let (_, stops) = parse_schedule(&page(&body));
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].station_name, "");
        assert_eq!(stops[0].station_code, "");
        assert_eq!(stops[0].arrival, "10:00");
        assert_eq!(stops[0].departure, "");
    }

    #[test]
    fn header_table_fields() {
        let meta = "<table>\
            <tr><td>MUMBAI CENTRAL - NEW DELHI</td><td>Travel Time: 15:32 hrs</td></tr>\
            <tr><td colspan=2>Days of Run: Daily Type: RAJ</td></tr>\
            <tr><td>Reserved Class of Travel: 1A 2A 3A</td><td>Un-Reserved Class : NA</td></tr>\
            </table>";
        let body = format!("{meta}<table>{HEADER}{}</table>", stop_row("1", "A", "AA", "--", "1", "0"));
        let (info, stops) = parse_schedule(&page(&body));

        assert_eq!(stops.len(), 1);
        assert_eq!(info.route.as_deref(), Some("MUMBAI CENTRAL - NEW DELHI"));
        assert_eq!(info.travel_time.as_deref(), Some("15:32 hrs"));
        assert_eq!(info.days_of_run.as_deref(), Some("Daily"));
        assert_eq!(info.train_type.as_deref(), Some("RAJ"));
        assert_eq!(info.reserved_class.as_deref(), Some("1A 2A 3A"));
        assert_eq!(info.unreserved_class.as_deref(), Some("NA"));
        // row absent
        assert_eq!(info.fare_category, None);
        assert_eq!(info.season_ticket, None);
    }

    #[test]
    fn fare_row_and_missing_type() {
        let meta = "<table>\
            <tr><td>A - B</td><td>Travel Time: 2:00 hrs</td></tr>\
            <tr><td>Days of Run: Mon Wed</td></tr>\
            <tr><td>Un-Reserved Fare Category : Express</td><td>Un-Reserved Season Ticket (MST) : Yes</td></tr>\
            </table>";
        let (info, stops) = parse_schedule(&page(meta));
        assert!(stops.is_empty());
        assert_eq!(info.days_of_run.as_deref(), Some("Mon Wed"));
        assert_eq!(info.train_type.as_deref(), Some(""));
        assert_eq!(info.fare_category.as_deref(), Some("Express"));
        assert_eq!(info.season_ticket.as_deref(), Some("Yes"));
    }
}

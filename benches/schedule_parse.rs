// benches/schedule_parse.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rail_scrape::specs::schedule::parse_schedule;

/// A long-distance train page: header table plus ~120 stop rows.
fn sample_page() -> String {
    let mut stops = String::from(
        "<table><tr><td>Sr</td><td>Station</td><td>Day</td><td>Arr/Dep</td><td>Halt</td><td>Dist</td></tr>",
    );
    for i in 0..120 {
        stops.push_str(&format!(
            "<tr><td>{}</td><td><font>STATION {i}</font><br><font>S{i:03}</font></td><td>{}</td>\
             <td><font>{:02}:{:02}</font><br><font>{:02}:{:02}</font></td><td>2 min</td><td>{}</td></tr>",
            i + 1,
            i / 40 + 1,
            i % 24, i % 60,
            i % 24, (i + 2) % 60,
            i * 17
        ));
        if i % 25 == 0 {
            stops.push_str("<tr><td colspan=6>Note</td></tr>");
        }
    }
    stops.push_str("</table>");

    let meta = "<table>\
        <tr><td>KANYAKUMARI - DIBRUGARH</td><td>Travel Time: 74:35 hrs</td></tr>\
        <tr><td colspan=2>Days of Run: Sat Type: EXP</td></tr>\
        <tr><td>Reserved Class of Travel: 2A 3A SL</td><td>Un-Reserved Class : GN</td></tr>\
        <tr><td>Un-Reserved Fare Category : Mail/Express</td><td>Un-Reserved Season Ticket (MST) : No</td></tr>\
        </table>";

    format!("<html><head><title>Schedule</title></head><body><table><tr><td>layout</td></tr></table>{meta}{stops}</body></html>")
}

fn bench_schedule(c: &mut Criterion) {
    let doc = sample_page();

    c.bench_function("parse_schedule", |b| {
        b.iter(|| {
            let (info, stops) = parse_schedule(black_box(&doc));
            black_box((info.is_empty(), stops.len()))
        })
    });
}

criterion_group!(benches, bench_schedule);
criterion_main!(benches);

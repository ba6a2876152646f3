// src/progress.rs
use crate::data::{HarvestResult, Train};
use crate::error::HarvestError;

/// Lightweight progress reporting for the harvest loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of trains.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// `index` is 0-based position in the catalog; `stops` may be 0.
    fn item_done(&mut self, _index: usize, _train: &Train, _stops: usize) {}

    fn item_failed(&mut self, _index: usize, _train: &Train, _err: &HarvestError) {}

    /// A progress checkpoint holding `saved` schedules was written.
    fn checkpoint(&mut self, _saved: usize) {}

    /// Called at the end of a completed run.
    fn finish(&mut self, _result: &HarvestResult) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Status lines on stdout, one per train.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Harvesting schedules for {total} trains");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, index: usize, train: &Train, stops: usize) {
        println!("[{}/{}] {} - {}: {stops} stops", index + 1, self.total, train.number, train.name);
    }

    fn item_failed(&mut self, _index: usize, train: &Train, err: &HarvestError) {
        println!("  Failed {}: {err}", train.number);
    }

    fn checkpoint(&mut self, saved: usize) {
        println!("  Progress saved ({saved} trains)");
    }

    fn finish(&mut self, result: &HarvestResult) {
        println!();
        println!("Done!");
        println!("Trains processed : {}", result.schedules.len());
        println!("Failed           : {}", result.failed.len());
    }
}

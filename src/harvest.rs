// src/harvest.rs
//! The schedule harvest: walk the train catalog in order, look each train up,
//! keep the ones that have stops, checkpoint as we go.
//!
//! One failing train never stops the run. A lost browser session is rebuilt
//! before the next train; the train that hit it is recorded as failed and not
//! retried.

use crate::config::HarvestOptions;
use crate::data::{HarvestResult, Schedule, Train};
use crate::driver::ScheduleSource;
use crate::error::{HarvestError, Result};
use crate::progress::Progress;
use crate::specs::schedule::parse_schedule;
use crate::store::ScheduleStore;

/// Look up one train and parse its page. `Ok(None)` means no published schedule.
async fn harvest_one<S: ScheduleSource>(source: &mut S, train: &Train) -> Result<Option<Schedule>> {
    let page = source.fetch_schedule(&train.number).await?;
    let (info, stops) = parse_schedule(&page);
    if stops.is_empty() {
        return Ok(None);
    }
    Ok(Some(Schedule {
        train_name: train.name.clone(),
        info: (!info.is_empty()).then_some(info),
        stops,
    }))
}

/// Run the harvest over `trains`.
///
/// Errors returned from here are the fatal ones: a failed checkpoint or
/// final write, or a session that could not be recovered. In the last case
/// a progress checkpoint is written before returning.
pub async fn run<S, St>(
    source: &mut S,
    trains: &[Train],
    store: &mut St,
    opts: &HarvestOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<HarvestResult>
where
    S: ScheduleSource,
    St: ScheduleStore + ?Sized,
{
    let mut result = HarvestResult::default();
    let every = opts.checkpoint_every.max(1);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(trains.len());
    }

    for (i, train) in trains.iter().enumerate() {
        match harvest_one(source, train).await {
            Ok(found) => {
                let stops = found.as_ref().map_or(0, |s| s.stops.len());
                if let Some(sched) = found {
                    result.schedules.insert(train.number.clone(), sched);
                }
                log::debug!("{}: {stops} stops", train.number);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, train, stops);
                }
            }
            Err(e) => {
                log::warn!("Failed {}: {e}", train.number);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, train, &e);
                }
                result.failed.push(train.number.clone());
                match recover_if_lost(source, &e).await {
                    Ok(true) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.log("  Browser session restarted");
                        }
                    }
                    Ok(false) => {}
                    Err(fatal) => {
                        // Keep what was collected since the last checkpoint.
                        if let Err(save) = store.save_progress(&result.schedules) {
                            log::error!("Could not save progress before aborting: {save}");
                        }
                        return Err(fatal);
                    }
                }
            }
        }

        if (i + 1) % every == 0 {
            store.save_progress(&result.schedules)?;
            log::info!("Checkpoint after {} trains: {} schedules", i + 1, result.schedules.len());
            if let Some(p) = progress.as_deref_mut() {
                p.checkpoint(result.schedules.len());
            }
        }
    }

    store.save_final(&result.schedules, &result.failed)?;
    if let Some(p) = progress.as_deref_mut() {
        p.finish(&result);
    }
    Ok(result)
}

/// Rebuild the session when `err` lost it. `Ok(true)` when a recovery ran.
async fn recover_if_lost<S: ScheduleSource>(source: &mut S, err: &HarvestError) -> Result<bool> {
    if !err.is_session_lost() {
        return Ok(false);
    }
    source.recover().await.inspect_err(|e| log::error!("Recovery failed: {e}"))?;
    Ok(true)
}

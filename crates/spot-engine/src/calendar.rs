//! Top-level available-spots query over a loaded calendar record.

use crate::clock;
use crate::error::Result;
use crate::splitter;
use crate::tiler::{self, Durations};
use crate::types::{CalendarRecord, MiniSlot};

/// Compute every bookable mini-slot for `date` (display format
/// `DD-MM-YYYY`) and a client-visible `duration` in minutes.
///
/// Windows are processed in record order: each window is first reduced to
/// its conflict-free sub-intervals, then each sub-interval is tiled with
/// fixed-size buffered blocks, and all mini-slot runs are concatenated. A
/// date with no recorded windows yields an empty list.
///
/// The record is read-only for the duration of the call; concurrent queries
/// over the same snapshot are safe.
pub fn get_available_spots(
    record: &CalendarRecord,
    date: &str,
    duration: u32,
) -> Result<Vec<MiniSlot>> {
    let date_iso = clock::to_iso_date(date)?;
    let durations = Durations::new(record.duration_before, duration, record.duration_after)?;

    let sessions = record.sessions_for(date);

    let mut spots = Vec::new();
    for window in record.windows_for(date) {
        for interval in splitter::split(*window, sessions)? {
            spots.extend(tiler::tile(interval, date_iso, durations)?);
        }
    }

    Ok(spots)
}

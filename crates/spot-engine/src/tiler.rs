//! Tile a conflict-free interval with fixed-size bookable blocks.
//!
//! Greedy left-to-right packing: each block reserves
//! `before + session + after` minutes but exposes only the inner `session`
//! minutes to the client. Packing stops at the first block that would
//! overrun the interval end, so an interval shorter than one block yields
//! an empty list (not an error).

use chrono::NaiveDate;

use crate::error::{Result, SpotError};
use crate::types::{MiniSlot, TimeRange};

/// The buffer/duration triple for one query, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Lead buffer reserved before the client-visible session.
    pub before: u32,
    /// The client-visible session length. Must be positive.
    pub session: u32,
    /// Trail buffer reserved after the client-visible session.
    pub after: u32,
}

impl Durations {
    /// Build a validated triple. Buffers may be zero; the session may not.
    pub fn new(before: u32, session: u32, after: u32) -> Result<Self> {
        let durations = Durations {
            before,
            session,
            after,
        };
        durations.validate()?;
        Ok(durations)
    }

    /// A zero-length session would make the packing cursor stand still, so
    /// it is rejected up front. This also guarantees tiling terminates.
    pub fn validate(&self) -> Result<()> {
        if self.session == 0 {
            return Err(SpotError::InvalidDuration(
                "session duration must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Full reserved block length in minutes.
    pub fn block_minutes(&self) -> u64 {
        u64::from(self.before) + u64::from(self.session) + u64::from(self.after)
    }
}

/// Produce the ordered mini-slots that fit entirely inside `interval`.
///
/// For an interval of length `L` and block size `B` this yields exactly
/// `floor(L / B)` slots, strictly increasing and back to back.
///
/// # Errors
/// [`SpotError::MalformedInterval`] for an inverted interval,
/// [`SpotError::InvalidDuration`] for a zero session duration.
pub fn tile(interval: TimeRange, date: NaiveDate, durations: Durations) -> Result<Vec<MiniSlot>> {
    interval.validate()?;
    durations.validate()?;

    let block = durations.block_minutes();
    let mut slots = Vec::new();
    let mut cursor = interval.start;

    // The fit check runs on raw minute counts before any wall-clock
    // addition, so the additions below can never leave 00:00..=24:00.
    while u64::from(cursor.minutes()) + block <= u64::from(interval.end.minutes()) {
        let block_end = cursor.add_minutes(block as i32)?;
        let client_start = cursor.add_minutes(durations.before as i32)?;
        let client_end = cursor.add_minutes((durations.before + durations.session) as i32)?;

        slots.push(MiniSlot {
            start_hour: cursor.to_instant(date),
            end_hour: block_end.to_instant(date),
            client_start_hour: client_start.to_instant(date),
            client_end_hour: client_end.to_instant(date),
        });

        cursor = block_end;
    }

    Ok(slots)
}

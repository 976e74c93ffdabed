//! Value objects for one availability query.
//!
//! Everything here is an immutable snapshot: constructed when a calendar
//! record is loaded or a query runs, discarded when the query ends. No type
//! carries mutable state across queries.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::HourOfDay;
use crate::error::{Result, SpotError};

/// An open availability window or a reserved session on one date.
///
/// The two share a shape; which one a value means depends on whether it came
/// from the record's `slots` or `sessions` list. Invariant: `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: HourOfDay,
    pub end: HourOfDay,
}

impl TimeRange {
    /// Build a validated range.
    pub fn new(start: HourOfDay, end: HourOfDay) -> Result<Self> {
        let range = TimeRange { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Check the `start < end` invariant.
    ///
    /// Deserialized ranges go through this before any arithmetic touches
    /// them, so a corrupt record fails loudly instead of producing wrong
    /// output.
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(SpotError::MalformedInterval(format!(
                "range end {} is not after start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Length in minutes.
    pub fn len_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

/// Immutable snapshot of one calendar's buffers, availability and bookings.
///
/// Field names mirror the on-disk JSON format. Date keys in `slots` and
/// `sessions` use the display form `DD-MM-YYYY`; the ISO form never appears
/// as a map key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRecord {
    /// Non-bookable lead padding reserved before each session, in minutes.
    pub duration_before: u32,
    /// Non-bookable trail padding reserved after each session, in minutes.
    pub duration_after: u32,
    /// Open availability windows per display-format date.
    #[serde(default)]
    pub slots: BTreeMap<String, Vec<TimeRange>>,
    /// Already-reserved sessions per display-format date.
    #[serde(default)]
    pub sessions: BTreeMap<String, Vec<TimeRange>>,
}

impl CalendarRecord {
    /// Availability windows recorded for a display-format date key.
    /// A date with no entry is simply empty, not an error.
    pub fn windows_for(&self, date: &str) -> &[TimeRange] {
        self.slots.get(date).map_or(&[], Vec::as_slice)
    }

    /// Reserved sessions recorded for a display-format date key.
    pub fn sessions_for(&self, date: &str) -> &[TimeRange] {
        self.sessions.get(date).map_or(&[], Vec::as_slice)
    }
}

/// One bookable block: lead buffer + client-visible duration + trail buffer.
///
/// `start_hour..end_hour` spans the full reserved block; the client-facing
/// `client_start_hour..client_end_hour` sits `durationBefore` minutes in and
/// lasts exactly the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniSlot {
    pub start_hour: DateTime<Utc>,
    pub end_hour: DateTime<Utc>,
    pub client_start_hour: DateTime<Utc>,
    pub client_end_hour: DateTime<Utc>,
}

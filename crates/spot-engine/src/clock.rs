//! Typed wall-clock primitives for single-day slot arithmetic.
//!
//! Every hour comparison in the crate goes through one of two projections:
//! the [`HourOfDay`] minute-of-day ordering when only same-day relative
//! ordering matters, and [`HourOfDay::to_instant`] when a date is known and
//! absolute ordering matters. The two are distinct Rust types, so they
//! cannot be mixed by accident.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpotError};

/// Minutes in one calendar day. An [`HourOfDay`] may equal this value to
/// represent the exclusive end bound `24:00`.
const MINUTES_PER_DAY: u16 = 1440;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Parses from and formats as `"HH:mm"`. `"24:00"` (minute 1440) is accepted
/// so that an availability window may end exactly at midnight; anything
/// outside `00:00..=24:00` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HourOfDay(u16);

impl HourOfDay {
    /// Build from a raw minute-of-day count.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes > MINUTES_PER_DAY {
            return Err(SpotError::MalformedInterval(format!(
                "minute-of-day {minutes} is outside 00:00..=24:00"
            )));
        }
        Ok(HourOfDay(minutes))
    }

    /// Minutes since midnight — the same-day comparison key.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Add `minutes` (may be negative) without crossing midnight.
    ///
    /// A result outside `00:00..=24:00` is a [`SpotError::MalformedInterval`]
    /// rather than a silent roll-over into the next day, so downstream
    /// instant conversions can never be fed a wrapped hour.
    pub fn add_minutes(self, minutes: i32) -> Result<Self> {
        let total = i32::from(self.0) + minutes;
        if !(0..=i32::from(MINUTES_PER_DAY)).contains(&total) {
            return Err(SpotError::MalformedInterval(format!(
                "{self} {minutes:+} minutes leaves the 00:00..=24:00 range"
            )));
        }
        Ok(HourOfDay(total as u16))
    }

    /// Combine with an ISO date into an absolute UTC instant.
    ///
    /// The single boundary where a wall-clock hour becomes comparable across
    /// days. `24:00` maps to midnight of the following day.
    pub fn to_instant(self, date: NaiveDate) -> DateTime<Utc> {
        (date.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(self.0))).and_utc()
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for HourOfDay {
    type Err = SpotError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || SpotError::MalformedInterval(format!("invalid HH:mm hour: {s:?}"));
        let (h, m) = s.split_once(':').ok_or_else(malformed)?;
        if h.len() != 2
            || m.len() != 2
            || !h.chars().all(|c| c.is_ascii_digit())
            || !m.chars().all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }
        let hours: u16 = h.parse().map_err(|_| malformed())?;
        let mins: u16 = m.parse().map_err(|_| malformed())?;
        if mins > 59 {
            return Err(malformed());
        }
        let total = hours * 60 + mins;
        if total > MINUTES_PER_DAY {
            return Err(malformed());
        }
        Ok(HourOfDay(total))
    }
}

impl TryFrom<String> for HourOfDay {
    type Error = SpotError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<HourOfDay> for String {
    fn from(hour: HourOfDay) -> String {
        hour.to_string()
    }
}

/// Parse a display-format `DD-MM-YYYY` date into its ISO calendar date.
///
/// Strict on both shape and calendar validity: day 31 of a 30-day month is
/// rejected with [`SpotError::InvalidDateFormat`], never rolled over.
pub fn to_iso_date(display: &str) -> Result<NaiveDate> {
    let invalid = || SpotError::InvalidDateFormat(display.to_string());

    let mut parts = display.splitn(3, '-');
    let (day, month, year) = match (parts.next(), parts.next(), parts.next()) {
        (Some(d), Some(m), Some(y)) if d.len() == 2 && m.len() == 2 && y.len() == 4 => (d, m, y),
        _ => return Err(invalid()),
    };
    if ![day, month, year]
        .iter()
        .all(|p| p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

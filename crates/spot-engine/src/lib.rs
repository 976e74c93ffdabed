//! # spot-engine
//!
//! Bookable appointment slots for a single calendar day.
//!
//! Given open availability windows, already-reserved sessions, and a
//! requested session duration with mandatory lead/trail buffers, the engine
//! subtracts the sessions from the windows and tiles each conflict-free
//! interval with fixed-size bookable blocks. The computation is pure,
//! synchronous and single-threaded: it runs over an immutable
//! [`CalendarRecord`] snapshot and returns a fresh result with no retained
//! references.
//!
//! ## Modules
//!
//! - [`clock`] — typed wall-clock primitives (`HH:mm`, minute-of-day, UTC instants)
//! - [`splitter`] — subtract reserved sessions from an availability window
//! - [`tiler`] — tile a conflict-free interval with buffered mini-slots
//! - [`calendar`] — the top-level available-spots query
//! - [`provider`] — calendar snapshot loading (JSON files, in-memory)
//! - [`error`] — error types

pub mod calendar;
pub mod clock;
pub mod error;
pub mod provider;
pub mod splitter;
pub mod tiler;
pub mod types;

pub use calendar::get_available_spots;
pub use clock::HourOfDay;
pub use error::SpotError;
pub use provider::{CalendarDataProvider, InMemoryProvider, JsonFileProvider};
pub use tiler::Durations;
pub use types::{CalendarRecord, MiniSlot, TimeRange};

//! Calendar snapshot loading.
//!
//! The engine itself never touches the filesystem; callers hand it an
//! already-loaded [`CalendarRecord`]. The provider trait is the seam where
//! that record comes from: a JSON file directory in production, an
//! in-memory map in tests.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Result, SpotError};
use crate::types::CalendarRecord;

/// Source of immutable calendar snapshots, keyed by an opaque identifier.
pub trait CalendarDataProvider {
    /// Load the record for `calendar_id`.
    ///
    /// # Errors
    /// [`SpotError::CalendarNotFound`] when the identifier is unknown,
    /// [`SpotError::CalendarDataCorrupt`] when the stored record fails to
    /// parse into the expected shape.
    fn load(&self, calendar_id: &str) -> Result<CalendarRecord>;
}

/// Reads `calendar.<id>.json` files from a configured directory.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    dir: PathBuf,
}

impl JsonFileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileProvider { dir: dir.into() }
    }

    fn path_for(&self, calendar_id: &str) -> PathBuf {
        self.dir.join(format!("calendar.{calendar_id}.json"))
    }
}

impl CalendarDataProvider for JsonFileProvider {
    fn load(&self, calendar_id: &str) -> Result<CalendarRecord> {
        let path = self.path_for(calendar_id);
        let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SpotError::CalendarNotFound(calendar_id.to_string()),
            _ => SpotError::CalendarDataCorrupt(format!("{}: {e}", path.display())),
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| SpotError::CalendarDataCorrupt(format!("{}: {e}", path.display())))
    }
}

/// Holds records in memory; the test double for [`JsonFileProvider`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    records: BTreeMap<String, CalendarRecord>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, calendar_id: impl Into<String>, record: CalendarRecord) {
        self.records.insert(calendar_id.into(), record);
    }
}

impl CalendarDataProvider for InMemoryProvider {
    fn load(&self, calendar_id: &str) -> Result<CalendarRecord> {
        self.records
            .get(calendar_id)
            .cloned()
            .ok_or_else(|| SpotError::CalendarNotFound(calendar_id.to_string()))
    }
}

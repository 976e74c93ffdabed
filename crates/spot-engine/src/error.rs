//! Error types for spot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Malformed interval: {0}")]
    MalformedInterval(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    #[error("Calendar data corrupt: {0}")]
    CalendarDataCorrupt(String),
}

pub type Result<T> = std::result::Result<T, SpotError>;

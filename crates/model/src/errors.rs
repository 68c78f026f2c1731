use thiserror::Error;

use crate::time::LocalTime;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),
    #[error("Invalid duration: {0} min")]
    InvalidDuration(u32),
    #[error("Invalid range: {start}-{end}")]
    InvalidRange { start: LocalTime, end: LocalTime },
    #[error("Booking crosses midnight: {start} +{duration_min} min")]
    CrossesMidnight { start: LocalTime, duration_min: u32 },
    #[error("Range {start}-{end} overlaps {other_start}-{other_end}")]
    OverlappingRanges {
        start: LocalTime,
        end: LocalTime,
        other_start: LocalTime,
        other_end: LocalTime,
    },
    #[error("Range not found: {0}")]
    RangeNotFound(String),
}

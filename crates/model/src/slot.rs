use std::fmt::Debug;

use crate::time::{LocalTime, MINUTES_PER_DAY};

/// Half-open interval `[start, start + duration)` within one day.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    start: LocalTime,
    duration_min: u32,
}

impl Slot {
    pub fn new(start: LocalTime, duration_min: u32) -> Slot {
        Slot {
            start,
            duration_min,
        }
    }

    pub fn between(start: LocalTime, end: LocalTime) -> Slot {
        Slot::new(start, end.minutes().saturating_sub(start.minutes()))
    }

    pub fn start(&self) -> LocalTime {
        self.start
    }

    pub fn duration_min(&self) -> u32 {
        self.duration_min
    }

    fn start_min(&self) -> u64 {
        self.start.minutes() as u64
    }

    // Wide enough that no duration can wrap.
    fn end_min(&self) -> u64 {
        self.start_min() + self.duration_min as u64
    }

    /// `None` when the slot runs past midnight.
    pub fn end(&self) -> Option<LocalTime> {
        self.start.checked_add_minutes(self.duration_min)
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end_min() > MINUTES_PER_DAY as u64
    }

    pub fn in_slot(&self, time: LocalTime) -> bool {
        let time = time.minutes() as u64;
        time >= self.start_min() && time < self.end_min()
    }

    /// Both ends lie inside `[start, end]`.
    pub fn within(&self, start: LocalTime, end: LocalTime) -> bool {
        self.start_min() >= start.minutes() as u64 && self.end_min() <= end.minutes() as u64
    }

    /// Touching at a boundary is not a conflict.
    pub fn has_conflict(&self, other: &Slot) -> bool {
        self.start_min() < other.end_min() && other.start_min() < self.end_min()
    }
}

impl Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end() {
            Some(end) => write!(f, "[{}<->{}]", self.start, end),
            None => write!(f, "[{}<->+{}m]", self.start, self.duration_min),
        }
    }
}

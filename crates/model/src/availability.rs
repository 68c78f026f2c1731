use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoEnumIterator as _};

use crate::{
    errors::AvailabilityError,
    ids::{add_days, day_key, weekday_index, CoachId},
    slot::Slot,
    time::LocalTime,
};

pub const SLOT_DURATION_MIN: u32 = 60;
pub const LOOKAHEAD_DAYS: u32 = 60;

#[derive(
    FromRepr, EnumIter, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum WeekDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekDay {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn of(date: NaiveDate) -> WeekDay {
        WeekDay::from_repr(weekday_index(date) as u8).unwrap_or(WeekDay::Sunday)
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeekDay::Sunday => "sunday",
            WeekDay::Monday => "monday",
            WeekDay::Tuesday => "tuesday",
            WeekDay::Wednesday => "wednesday",
            WeekDay::Thursday => "thursday",
            WeekDay::Friday => "friday",
            WeekDay::Saturday => "saturday",
        }
    }
}

impl std::str::FromStr for WeekDay {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        WeekDay::iter()
            .find(|day| day.name() == needle || day.name()[..3] == needle)
            .ok_or_else(|| AvailabilityError::InvalidWeekday(s.to_owned()))
    }
}

impl std::fmt::Display for WeekDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub id: String,
    pub start: LocalTime,
    pub end: LocalTime,
}

impl TimeRange {
    pub fn new(id: impl Into<String>, start: LocalTime, end: LocalTime) -> TimeRange {
        TimeRange {
            id: id.into(),
            start,
            end,
        }
    }

    pub fn slot(&self) -> Slot {
        Slot::between(self.start, self.end)
    }

    /// Hourly start times from `start` while before `end`.
    pub fn hourly_starts(&self) -> impl Iterator<Item = LocalTime> + '_ {
        (self.start.minutes()..self.end.minutes())
            .step_by(SLOT_DURATION_MIN as usize)
            .filter_map(LocalTime::from_minutes)
            .filter(|time| !time.is_end_of_day())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub day: WeekDay,
    pub available: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeRange>,
}

impl DayAvailability {
    pub fn is_open(&self) -> bool {
        self.available && !self.time_slots.is_empty()
    }

    pub fn range(&self, id: &str) -> Option<&TimeRange> {
        self.time_slots.iter().find(|range| range.id == id)
    }

    fn check_range(
        &self,
        start: LocalTime,
        end: LocalTime,
        skip: Option<&str>,
    ) -> Result<(), AvailabilityError> {
        if start >= end {
            return Err(AvailabilityError::InvalidRange { start, end });
        }
        let new = Slot::between(start, end);
        for other in &self.time_slots {
            if Some(other.id.as_str()) == skip {
                continue;
            }
            if other.slot().has_conflict(&new) {
                return Err(AvailabilityError::OverlappingRanges {
                    start,
                    end,
                    other_start: other.start,
                    other_end: other.end,
                });
            }
        }
        Ok(())
    }
}

/// Recurring template indexed 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct WeeklyAvailability([DayAvailability; 7]);

impl WeeklyAvailability {
    pub fn day(&self, day: WeekDay) -> &DayAvailability {
        &self.0[day.index()]
    }

    pub fn day_mut(&mut self, day: WeekDay) -> &mut DayAvailability {
        &mut self.0[day.index()]
    }

    pub fn for_date(&self, date: NaiveDate) -> &DayAvailability {
        self.day(WeekDay::of(date))
    }

    pub fn days(&self) -> impl Iterator<Item = &DayAvailability> {
        self.0.iter()
    }

    fn next_range_id(&self) -> String {
        let max = self
            .days()
            .flat_map(|day| day.time_slots.iter())
            .filter_map(|range| range.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }
}

impl Default for WeeklyAvailability {
    fn default() -> Self {
        let range = |id: &str, start: (u32, u32), end: (u32, u32)| TimeRange {
            id: id.to_owned(),
            start: LocalTime::from_minutes(start.0 * 60 + start.1).unwrap_or_default(),
            end: LocalTime::from_minutes(end.0 * 60 + end.1).unwrap_or_default(),
        };
        let day = |day: WeekDay, available: bool, time_slots: Vec<TimeRange>| DayAvailability {
            day,
            available,
            time_slots,
        };

        WeeklyAvailability([
            day(WeekDay::Sunday, false, vec![]),
            day(WeekDay::Monday, true, vec![range("1", (9, 0), (17, 0))]),
            day(WeekDay::Tuesday, true, vec![range("2", (9, 0), (17, 0))]),
            day(WeekDay::Wednesday, true, vec![range("3", (9, 0), (17, 0))]),
            day(WeekDay::Thursday, true, vec![range("4", (9, 0), (17, 0))]),
            day(WeekDay::Friday, true, vec![range("5", (9, 0), (17, 0))]),
            day(WeekDay::Saturday, false, vec![range("6", (10, 0), (14, 0))]),
        ])
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockedSlot {
    pub start: LocalTime,
    pub end: LocalTime,
    pub coach_id: CoachId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

impl BlockedSlot {
    pub fn slot(&self) -> Slot {
        Slot::between(self.start, self.end)
    }
}

/// Everything known about one coach's bookable time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CoachAvailability {
    #[serde(default)]
    pub availability: WeeklyAvailability,
    #[serde(default)]
    pub blocked_slots: BTreeMap<String, Vec<BlockedSlot>>,
}

impl CoachAvailability {
    pub fn blocks_on(&self, date: NaiveDate) -> &[BlockedSlot] {
        self.blocked_slots
            .get(&day_key(date))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Appends a block. Overlapping and duplicate blocks are stored as is.
    pub fn block(
        &mut self,
        coach_id: &CoachId,
        date: NaiveDate,
        start: LocalTime,
        duration_min: u32,
        booking_id: Option<String>,
    ) -> Result<BlockedSlot, AvailabilityError> {
        if duration_min == 0 {
            return Err(AvailabilityError::InvalidDuration(duration_min));
        }
        let end = start
            .checked_add_minutes(duration_min)
            .ok_or(AvailabilityError::CrossesMidnight {
                start,
                duration_min,
            })?;

        let blocked = BlockedSlot {
            start,
            end,
            coach_id: coach_id.clone(),
            booking_id,
        };
        self.blocked_slots
            .entry(day_key(date))
            .or_default()
            .push(blocked.clone());
        Ok(blocked)
    }

    pub fn block_range(
        &mut self,
        coach_id: &CoachId,
        date: NaiveDate,
        start: LocalTime,
        end: LocalTime,
    ) -> Result<BlockedSlot, AvailabilityError> {
        if start >= end {
            return Err(AvailabilityError::InvalidRange { start, end });
        }
        self.block(coach_id, date, start, end.minutes() - start.minutes(), None)
    }

    pub fn is_time_slot_available(
        &self,
        date: NaiveDate,
        start: LocalTime,
        duration_min: u32,
    ) -> bool {
        let day = self.availability.for_date(date);
        if !day.available {
            return false;
        }

        let candidate = Slot::new(start, duration_min);
        if candidate.crosses_midnight() {
            return false;
        }

        let in_working_hours = day
            .time_slots
            .iter()
            .any(|range| candidate.within(range.start, range.end));
        if !in_working_hours {
            return false;
        }

        !self
            .blocks_on(date)
            .iter()
            .any(|blocked| blocked.slot().has_conflict(&candidate))
    }

    /// Hourly start times on `date` that are later than `now` and still free.
    pub fn available_time_slots(&self, date: NaiveDate, now: NaiveDateTime) -> Vec<LocalTime> {
        let day = self.availability.for_date(date);
        if !day.is_open() {
            return Vec::new();
        }

        day.time_slots
            .iter()
            .flat_map(TimeRange::hourly_starts)
            .filter(|start| start.on(date) > now)
            .filter(|start| self.is_time_slot_available(date, *start, SLOT_DURATION_MIN))
            .collect()
    }

    pub fn is_date_available(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        self.availability.for_date(date).is_open()
            && !self.available_time_slots(date, now).is_empty()
    }

    /// Falls back to `from + LOOKAHEAD_DAYS` when nothing is free; callers must re-check it.
    pub fn next_available_date(&self, from: NaiveDate, now: NaiveDateTime) -> NaiveDate {
        (0..LOOKAHEAD_DAYS)
            .map(|offset| add_days(from, offset))
            .find(|date| self.is_date_available(*date, now))
            .unwrap_or_else(|| add_days(from, LOOKAHEAD_DAYS))
    }

    pub fn set_day_available(&mut self, day: WeekDay, available: bool) {
        self.availability.day_mut(day).available = available;
    }

    pub fn add_time_range(
        &mut self,
        day: WeekDay,
        start: LocalTime,
        end: LocalTime,
    ) -> Result<TimeRange, AvailabilityError> {
        self.availability.day(day).check_range(start, end, None)?;
        let range = TimeRange::new(self.availability.next_range_id(), start, end);
        self.availability
            .day_mut(day)
            .time_slots
            .push(range.clone());
        Ok(range)
    }

    pub fn update_time_range(
        &mut self,
        day: WeekDay,
        id: &str,
        start: LocalTime,
        end: LocalTime,
    ) -> Result<TimeRange, AvailabilityError> {
        let schedule = self.availability.day(day);
        if schedule.range(id).is_none() {
            return Err(AvailabilityError::RangeNotFound(id.to_owned()));
        }
        schedule.check_range(start, end, Some(id))?;

        let range = self
            .availability
            .day_mut(day)
            .time_slots
            .iter_mut()
            .find(|range| range.id == id)
            .ok_or_else(|| AvailabilityError::RangeNotFound(id.to_owned()))?;
        range.start = start;
        range.end = end;
        Ok(range.clone())
    }

    pub fn remove_time_range(
        &mut self,
        day: WeekDay,
        id: &str,
    ) -> Result<TimeRange, AvailabilityError> {
        let slots = &mut self.availability.day_mut(day).time_slots;
        let idx = slots
            .iter()
            .position(|range| range.id == id)
            .ok_or_else(|| AvailabilityError::RangeNotFound(id.to_owned()))?;
        Ok(slots.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    fn time(s: &str) -> LocalTime {
        s.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-01-08 is a Monday.
    fn monday() -> NaiveDate {
        date(2024, 1, 8)
    }

    fn long_ago() -> NaiveDateTime {
        date(2000, 1, 1).and_hms_opt(0, 0, 0).unwrap()
    }

    fn coach() -> CoachId {
        CoachId::new("coach-1")
    }

    fn strings(slots: Vec<LocalTime>) -> Vec<String> {
        slots.into_iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_default_template() {
        let week = WeeklyAvailability::default();
        assert!(!week.day(WeekDay::Sunday).available);
        assert!(week.day(WeekDay::Sunday).time_slots.is_empty());
        for day in [
            WeekDay::Monday,
            WeekDay::Tuesday,
            WeekDay::Wednesday,
            WeekDay::Thursday,
            WeekDay::Friday,
        ] {
            let schedule = week.day(day);
            assert!(schedule.available);
            assert_eq!(schedule.time_slots.len(), 1);
            assert_eq!(schedule.time_slots[0].start, time("09:00"));
            assert_eq!(schedule.time_slots[0].end, time("17:00"));
        }
        let saturday = week.day(WeekDay::Saturday);
        assert!(!saturday.available);
        assert_eq!(saturday.time_slots[0].start, time("10:00"));
        assert_eq!(saturday.time_slots[0].end, time("14:00"));
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("Monday".parse::<WeekDay>().unwrap(), WeekDay::Monday);
        assert_eq!("sat".parse::<WeekDay>().unwrap(), WeekDay::Saturday);
        assert!("funday".parse::<WeekDay>().is_err());
        assert_eq!(WeekDay::of(monday()), WeekDay::Monday);
    }

    #[test]
    fn test_full_monday_is_enumerated() {
        let coach = CoachAvailability::default();
        let slots = strings(coach.available_time_slots(monday(), long_ago()));
        assert_eq!(
            slots,
            vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"]
        );
    }

    #[test]
    fn test_past_slots_are_skipped() {
        let coach = CoachAvailability::default();
        let now = monday().and_hms_opt(12, 0, 0).unwrap();
        let slots = strings(coach.available_time_slots(monday(), now));
        assert_eq!(slots, vec!["13:00", "14:00", "15:00", "16:00"]);
    }

    #[test]
    fn test_blocked_hour_is_excluded() {
        let mut coach = CoachAvailability::default();
        coach
            .block(&self::coach(), monday(), time("10:00"), 60, None)
            .unwrap();
        let slots = strings(coach.available_time_slots(monday(), long_ago()));
        assert!(!slots.contains(&"10:00".to_owned()));
        assert!(slots.contains(&"09:00".to_owned()));
        assert!(slots.contains(&"11:00".to_owned()));
        assert_eq!(slots.len(), 7);
    }

    #[test]
    fn test_unavailable_day_ignores_blocks() {
        let mut coach = CoachAvailability::default();
        let sunday = date(2024, 1, 7);
        assert!(!coach.is_time_slot_available(sunday, time("10:00"), 60));
        assert!(coach.available_time_slots(sunday, long_ago()).is_empty());
        assert!(!coach.is_date_available(sunday, long_ago()));

        let saturday = date(2024, 1, 13);
        coach
            .block(&self::coach(), saturday, time("10:00"), 60, None)
            .unwrap();
        assert!(!coach.is_time_slot_available(saturday, time("11:00"), 60));
        assert!(coach.available_time_slots(saturday, long_ago()).is_empty());
    }

    #[test]
    fn test_slot_must_fit_in_one_range() {
        let mut coach = CoachAvailability::default();
        coach.availability.day_mut(WeekDay::Monday).time_slots = vec![
            TimeRange::new("a", time("09:00"), time("12:00")),
            TimeRange::new("b", time("12:00"), time("15:00")),
        ];
        assert!(coach.is_time_slot_available(monday(), time("11:00"), 60));
        assert!(!coach.is_time_slot_available(monday(), time("11:30"), 60));
        assert!(!coach.is_time_slot_available(monday(), time("08:30"), 60));
        assert!(coach.is_time_slot_available(monday(), time("14:00"), 60));
        assert!(!coach.is_time_slot_available(monday(), time("14:30"), 60));
    }

    #[test]
    fn test_overlap_with_block_is_rejected() {
        let mut coach = CoachAvailability::default();
        coach
            .block_range(&self::coach(), monday(), time("10:00"), time("12:00"))
            .unwrap();

        // start inside, end inside, candidate contains block, block contains candidate
        assert!(!coach.is_time_slot_available(monday(), time("11:30"), 60));
        assert!(!coach.is_time_slot_available(monday(), time("09:30"), 60));
        assert!(!coach.is_time_slot_available(monday(), time("09:00"), 240));
        assert!(!coach.is_time_slot_available(monday(), time("10:15"), 30));
        assert!(!coach.is_time_slot_available(monday(), time("10:00"), 120));
    }

    #[test]
    fn test_touching_block_boundary_is_free() {
        let mut coach = CoachAvailability::default();
        coach
            .block(&self::coach(), monday(), time("10:00"), 60, None)
            .unwrap();
        assert!(coach.is_time_slot_available(monday(), time("09:00"), 60));
        assert!(coach.is_time_slot_available(monday(), time("11:00"), 60));
    }

    #[test]
    fn test_blocks_are_per_date() {
        let mut coach = CoachAvailability::default();
        coach
            .block(&self::coach(), monday(), time("10:00"), 60, None)
            .unwrap();
        let next_monday = add_days(monday(), 7);
        assert!(coach.is_time_slot_available(next_monday, time("10:00"), 60));
    }

    #[test]
    fn test_double_block_is_kept() {
        let mut coach = CoachAvailability::default();
        let first = coach
            .block(&self::coach(), monday(), time("10:00"), 60, Some("b1".into()))
            .unwrap();
        assert!(!coach.is_time_slot_available(monday(), time("10:00"), 60));
        coach
            .block(&self::coach(), monday(), time("10:00"), 60, Some("b2".into()))
            .unwrap();
        assert!(!coach.is_time_slot_available(monday(), time("10:00"), 60));

        let blocks = coach.blocks_on(monday());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], first);
        assert_eq!(blocks[0].end, time("11:00"));
        assert_eq!(blocks[1].booking_id.as_deref(), Some("b2"));
    }

    #[test]
    fn test_block_validation() {
        let mut coach = CoachAvailability::default();
        assert!(matches!(
            coach.block(&self::coach(), monday(), time("10:00"), 0, None),
            Err(AvailabilityError::InvalidDuration(0))
        ));
        assert!(matches!(
            coach.block(&self::coach(), monday(), time("23:30"), 60, None),
            Err(AvailabilityError::CrossesMidnight { .. })
        ));
        assert!(matches!(
            coach.block_range(&self::coach(), monday(), time("12:00"), time("11:00")),
            Err(AvailabilityError::InvalidRange { .. })
        ));
        assert!(coach.blocked_slots.is_empty());

        let late = coach
            .block(&self::coach(), monday(), time("23:00"), 60, None)
            .unwrap();
        assert!(late.end.is_end_of_day());
    }

    #[test]
    fn test_huge_duration_is_never_available() {
        let mut coach = CoachAvailability::default();
        coach.availability.day_mut(WeekDay::Monday).time_slots =
            vec![TimeRange::new("a", LocalTime::midnight(), LocalTime::end_of_day())];
        assert!(!coach.is_time_slot_available(monday(), time("09:00"), u32::MAX));
        assert!(!coach.is_time_slot_available(monday(), time("00:00"), u32::MAX));
        assert!(matches!(
            coach.block(&self::coach(), monday(), time("09:00"), u32::MAX, None),
            Err(AvailabilityError::CrossesMidnight { .. })
        ));
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        let mut coach = CoachAvailability::default();
        coach
            .block(&self::coach(), monday(), time("13:00"), 90, None)
            .unwrap();
        let first = coach.available_time_slots(monday(), long_ago());
        let second = coach.available_time_slots(monday(), long_ago());
        assert_eq!(first, second);
        assert_eq!(
            strings(first),
            vec!["09:00", "10:00", "11:00", "12:00", "15:00", "16:00"]
        );
    }

    #[test]
    fn test_enumeration_follows_range_order() {
        let mut coach = CoachAvailability::default();
        coach.availability.day_mut(WeekDay::Monday).time_slots = vec![
            TimeRange::new("a", time("14:00"), time("16:00")),
            TimeRange::new("b", time("08:30"), time("10:00")),
        ];
        let slots = strings(coach.available_time_slots(monday(), long_ago()));
        assert_eq!(slots, vec!["14:00", "15:00", "08:30"]);
    }

    #[test]
    fn test_late_range_stops_at_midnight() {
        let mut coach = CoachAvailability::default();
        coach.availability.day_mut(WeekDay::Monday).time_slots =
            vec![TimeRange::new("a", time("22:00"), LocalTime::end_of_day())];
        let slots = strings(coach.available_time_slots(monday(), long_ago()));
        assert_eq!(slots, vec!["22:00", "23:00"]);
    }

    #[test]
    fn test_next_available_date() {
        let coach = CoachAvailability::default();
        let sunday = date(2024, 1, 7);
        assert_eq!(coach.next_available_date(sunday, long_ago()), monday());
        assert_eq!(coach.next_available_date(monday(), long_ago()), monday());

        let evening = monday().and_hms_opt(18, 0, 0).unwrap();
        assert_eq!(
            coach.next_available_date(monday(), evening),
            date(2024, 1, 9)
        );
    }

    #[test]
    fn test_next_available_date_sentinel() {
        let mut coach = CoachAvailability::default();
        for day in WeekDay::iter() {
            coach.set_day_available(day, false);
        }
        assert_eq!(
            coach.next_available_date(monday(), long_ago()),
            add_days(monday(), LOOKAHEAD_DAYS)
        );
    }

    #[test]
    fn test_fully_booked_day_is_unavailable() {
        let mut coach = CoachAvailability::default();
        coach
            .block_range(&self::coach(), monday(), time("09:00"), time("17:00"))
            .unwrap();
        assert!(!coach.is_date_available(monday(), long_ago()));
        assert_eq!(
            coach.next_available_date(monday(), long_ago()),
            date(2024, 1, 9)
        );
    }

    #[test]
    fn test_edit_ranges() {
        let mut coach = CoachAvailability::default();
        let added = coach
            .add_time_range(WeekDay::Monday, time("18:00"), time("20:00"))
            .unwrap();
        assert_eq!(added.id, "7");
        assert!(coach.is_time_slot_available(monday(), time("19:00"), 60));

        assert!(matches!(
            coach.add_time_range(WeekDay::Monday, time("16:00"), time("18:30")),
            Err(AvailabilityError::OverlappingRanges { .. })
        ));
        assert!(matches!(
            coach.add_time_range(WeekDay::Monday, time("21:00"), time("21:00")),
            Err(AvailabilityError::InvalidRange { .. })
        ));

        let updated = coach
            .update_time_range(WeekDay::Monday, "7", time("17:00"), time("21:00"))
            .unwrap();
        assert_eq!(updated.end, time("21:00"));
        assert!(matches!(
            coach.update_time_range(WeekDay::Monday, "7", time("16:00"), time("21:00")),
            Err(AvailabilityError::OverlappingRanges { .. })
        ));
        assert!(matches!(
            coach.update_time_range(WeekDay::Monday, "99", time("06:00"), time("07:00")),
            Err(AvailabilityError::RangeNotFound(_))
        ));

        coach.remove_time_range(WeekDay::Monday, "7").unwrap();
        assert!(!coach.is_time_slot_available(monday(), time("19:00"), 60));
        assert!(matches!(
            coach.remove_time_range(WeekDay::Monday, "7"),
            Err(AvailabilityError::RangeNotFound(_))
        ));
    }

    #[test]
    fn test_toggle_day() {
        let mut coach = CoachAvailability::default();
        let saturday = date(2024, 1, 13);
        assert!(!coach.is_date_available(saturday, long_ago()));
        coach.set_day_available(WeekDay::Saturday, true);
        assert_eq!(
            strings(coach.available_time_slots(saturday, long_ago())),
            vec!["10:00", "11:00", "12:00", "13:00"]
        );
    }

    #[test]
    fn test_document_shape() {
        let mut coach = CoachAvailability::default();
        coach
            .block(&self::coach(), monday(), time("10:00"), 60, Some("b1".into()))
            .unwrap();
        let json = serde_json::to_value(&coach).unwrap();

        assert_eq!(json["availability"].as_array().unwrap().len(), 7);
        assert_eq!(json["availability"][0]["day"], "sunday");
        assert_eq!(json["availability"][1]["timeSlots"][0]["start"], "09:00");
        let block = &json["blockedSlots"]["2024-01-08"][0];
        assert_eq!(block["start"], "10:00");
        assert_eq!(block["end"], "11:00");
        assert_eq!(block["coachId"], "coach-1");
        assert_eq!(block["bookingId"], "b1");

        let back: CoachAvailability = serde_json::from_value(json).unwrap();
        assert_eq!(back, coach);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let coach: CoachAvailability = serde_json::from_str(
            r#"{"blockedSlots":{"2024-01-08":[{"start":"10:00","end":"11:00","coachId":"c"}]}}"#,
        )
        .unwrap();
        assert_eq!(coach.availability, WeeklyAvailability::default());
        assert_eq!(coach.blocks_on(monday())[0].booking_id, None);

        let coach: CoachAvailability = serde_json::from_str("{}").unwrap();
        assert_eq!(coach, CoachAvailability::default());
    }
}

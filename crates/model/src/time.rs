use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AvailabilityError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Wall-clock time of day with minute precision.
///
/// Valid values are `00:00..=23:59` plus `24:00`, which only marks the end of a day.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime(u16);

impl LocalTime {
    pub fn new(hour: u32, minute: u32) -> Result<LocalTime, AvailabilityError> {
        let valid = (hour < 24 && minute < 60) || (hour == 24 && minute == 0);
        if !valid {
            return Err(AvailabilityError::InvalidTimeFormat(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(LocalTime((hour * 60 + minute) as u16))
    }

    pub fn from_minutes(minutes: u32) -> Option<LocalTime> {
        if minutes > MINUTES_PER_DAY {
            None
        } else {
            Some(LocalTime(minutes as u16))
        }
    }

    pub fn midnight() -> LocalTime {
        LocalTime(0)
    }

    pub fn end_of_day() -> LocalTime {
        LocalTime(MINUTES_PER_DAY as u16)
    }

    pub fn is_end_of_day(&self) -> bool {
        self.0 as u32 == MINUTES_PER_DAY
    }

    pub fn minutes(&self) -> u32 {
        self.0 as u32
    }

    pub fn hour(&self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes() % 60
    }

    /// `None` once the result runs past the end of the day.
    pub fn checked_add_minutes(&self, minutes: u32) -> Option<LocalTime> {
        LocalTime::from_minutes(self.minutes().checked_add(minutes)?)
    }

    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + Duration::minutes(self.minutes() as i64)
    }
}

impl Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Debug for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for LocalTime {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AvailabilityError::InvalidTimeFormat(s.to_owned());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(hour) || hour.len() > 2 || !digits(minute) || minute.len() != 2 {
            return Err(invalid());
        }

        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.parse::<u32>().map_err(|_| invalid())?;
        LocalTime::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<&str> for LocalTime {
    type Error = AvailabilityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NaiveTime> for LocalTime {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike as _;
        LocalTime((time.hour() * 60 + time.minute()) as u16)
    }
}

impl Serialize for LocalTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocalTime {
    fn deserialize<D>(deserializer: D) -> Result<LocalTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

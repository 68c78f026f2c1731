use std::fmt::Display;

use chrono::{Datelike as _, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AvailabilityError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoachId(String);

impl CoachId {
    pub fn new(id: impl Into<String>) -> Self {
        CoachId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn storage_key(&self) -> String {
        format!("coach_{}_availability", self.0)
    }
}

impl Display for CoachId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CoachId {
    fn from(id: &str) -> Self {
        CoachId::new(id)
    }
}

impl From<String> for CoachId {
    fn from(id: String) -> Self {
        CoachId(id)
    }
}

/// Key of a calendar day in the blocked slots map.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, AvailabilityError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| AvailabilityError::InvalidDate(value.to_owned()))
}

/// 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date + Duration::days(days as i64)
}

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::engine::constants::DAYS_PER_WEEK;
use crate::models::{DailyLog, LoggedFood, NutrientReading, Profile};

/// Serialized shape of the log file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogState {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub days: Vec<DailyLog>,
}

/// Manages the food diary and the stored demographic profile.
pub struct LogManager {
    profile: Option<Profile>,
    days: BTreeMap<NaiveDate, DailyLog>,
}

impl LogManager {
    /// Build a manager from loaded state.
    ///
    /// Duplicate days are deduplicated by date, last occurrence wins.
    pub fn new(state: LogState) -> Self {
        let mut days = BTreeMap::new();
        for day in state.days {
            days.insert(day.date, day);
        }
        Self {
            profile: state.profile,
            days,
        }
    }

    pub fn empty() -> Self {
        Self {
            profile: None,
            days: BTreeMap::new(),
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    pub fn clear_profile(&mut self) {
        self.profile = None;
    }

    /// Append a logged food to the given date, creating the day if needed.
    pub fn log_food(&mut self, date: NaiveDate, food: LoggedFood) {
        self.days
            .entry(date)
            .or_insert_with(|| DailyLog::new(date))
            .foods
            .push(food);
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.days.get(&date)
    }

    /// All readings logged on one date, flattened across foods.
    pub fn readings_for(&self, date: NaiveDate) -> Vec<NutrientReading> {
        self.days
            .get(&date)
            .map(|day| day.readings())
            .unwrap_or_default()
    }

    /// Readings for the 7 days starting at `start`, one entry per day.
    /// Days with nothing logged yield empty vectors.
    pub fn week_readings(&self, start: NaiveDate) -> Vec<Vec<NutrientReading>> {
        (0..DAYS_PER_WEEK)
            .map(|offset| self.readings_for(start + Duration::days(offset as i64)))
            .collect()
    }

    pub fn clear_log(&mut self) {
        self.days.clear();
    }

    /// Number of days with at least one logged food.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Convert back to the serialized shape, days in date order.
    pub fn to_state(&self) -> LogState {
        LogState {
            profile: self.profile,
            days: self.days.values().cloned().collect(),
        }
    }
}

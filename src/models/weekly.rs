use serde::{Deserialize, Serialize};

use crate::models::comparison::{ComparisonRecord, Status};

/// One day's slice of a weekly record. `day_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day_number: u32,
    pub value: f64,
    pub status: Status,
}

/// A comparison record extended with its 7-day breakdown and variance
/// statistics. `daily_breakdown` always has 7 entries; days without data
/// carry value 0 classified against the daily references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRecord {
    pub record: ComparisonRecord,
    pub daily_breakdown: Vec<DayEntry>,
    pub weekly_average: f64,
    pub daily_variation: f64,
}

/// Full weekly rollup: records plus logging-consistency metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub records: Vec<WeeklyRecord>,
    pub days_with_data: u32,
    pub consistency_score: f64,
}

/// Week-over-week movement, only computable with a prior week's report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub nutrition_score_change: f64,
    pub calorie_change: f64,
    pub improving: Vec<String>,
    pub declining: Vec<String>,
}

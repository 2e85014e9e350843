use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::reading::{MealType, NutrientReading};

/// One food as logged by the user, with its analyzed readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedFood {
    pub name: String,
    pub meal_type: MealType,
    pub readings: Vec<NutrientReading>,
}

/// All foods logged on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub foods: Vec<LoggedFood>,
}

impl DailyLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            foods: Vec::new(),
        }
    }

    /// All readings for the day, flattened across foods.
    pub fn readings(&self) -> Vec<NutrientReading> {
        self.foods
            .iter()
            .flat_map(|food| food.readings.iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.iter().all(|food| food.readings.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reading::ReadingCategory;

    #[test]
    fn test_readings_flatten_across_foods() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let mut day = DailyLog::new(date);
        day.foods.push(LoggedFood {
            name: "Oatmeal".to_string(),
            meal_type: MealType::Breakfast,
            readings: vec![NutrientReading::new(
                "fiber",
                ReadingCategory::Good,
                4.0,
                MealType::Breakfast,
            )],
        });
        day.foods.push(LoggedFood {
            name: "Ramen".to_string(),
            meal_type: MealType::Dinner,
            readings: vec![
                NutrientReading::new("sodium", ReadingCategory::Bad, 1800.0, MealType::Dinner),
                NutrientReading::new("protein", ReadingCategory::Good, 12.0, MealType::Dinner),
            ],
        });

        assert_eq!(day.readings().len(), 3);
        assert!(!day.is_empty());
    }

    #[test]
    fn test_day_with_foods_but_no_readings_is_empty() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let mut day = DailyLog::new(date);
        day.foods.push(LoggedFood {
            name: "Water".to_string(),
            meal_type: MealType::Snack,
            readings: vec![],
        });
        assert!(day.is_empty());
    }
}

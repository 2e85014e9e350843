use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::state::manager::LogState;

/// Load log state from a JSON file.
pub fn load_log<P: AsRef<Path>>(path: P) -> Result<LogState> {
    let content = fs::read_to_string(path)?;
    let state: LogState = serde_json::from_str(&content)?;
    Ok(state)
}

/// Save log state to a JSON file.
pub fn save_log<P: AsRef<Path>>(path: P, state: &LogState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    use crate::models::{
        AgeGroup, DailyLog, Gender, LoggedFood, MealType, NutrientReading, Profile,
        ReadingCategory,
    };

    #[test]
    fn test_save_and_load_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let state = LogState {
            profile: Some(Profile {
                age_group: AgeGroup::Adult,
                gender: Gender::Female,
            }),
            days: vec![DailyLog {
                date,
                foods: vec![LoggedFood {
                    name: "Miso soup".to_string(),
                    meal_type: MealType::Dinner,
                    readings: vec![NutrientReading::new(
                        "sodium",
                        ReadingCategory::Bad,
                        800.0,
                        MealType::Dinner,
                    )],
                }],
            }],
        };

        let file = NamedTempFile::new().unwrap();
        save_log(file.path(), &state).unwrap();

        let reloaded = load_log(file.path()).unwrap();
        assert_eq!(reloaded.days.len(), 1);
        assert_eq!(reloaded.days[0].date, date);
        assert_eq!(reloaded.days[0].foods[0].name, "Miso soup");
        assert_eq!(
            reloaded.profile.unwrap().age_group,
            AgeGroup::Adult
        );
    }

    #[test]
    fn test_load_tolerates_missing_fields() {
        use std::io::Write;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let state = load_log(file.path()).unwrap();
        assert!(state.profile.is_none());
        assert!(state.days.is_empty());
    }
}

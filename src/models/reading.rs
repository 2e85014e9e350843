use serde::{Deserialize, Serialize};

/// Health categorization reported by the analysis collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingCategory {
    Good,
    Bad,
    Neutral,
}

/// Meal slot a food was logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

/// One substance observed in one analyzed food.
///
/// Amounts are in the substance's native unit as listed in the reference
/// table (grams unless noted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientReading {
    pub name: String,
    pub category: ReadingCategory,
    pub amount: f64,
    pub meal_type: MealType,
}

impl NutrientReading {
    pub fn new(name: &str, category: ReadingCategory, amount: f64, meal_type: MealType) -> Self {
        Self {
            name: name.to_string(),
            category,
            amount,
            meal_type,
        }
    }

    /// Basic contract check: a named substance and a finite amount.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.amount.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        let reading =
            NutrientReading::new("sodium", ReadingCategory::Bad, 1200.0, MealType::Lunch);
        assert!(reading.is_valid());
    }

    #[test]
    fn test_invalid_when_name_blank() {
        let reading = NutrientReading::new("  ", ReadingCategory::Good, 10.0, MealType::Snack);
        assert!(!reading.is_valid());
    }

    #[test]
    fn test_invalid_when_amount_not_finite() {
        let reading =
            NutrientReading::new("protein", ReadingCategory::Good, f64::NAN, MealType::Dinner);
        assert!(!reading.is_valid());
    }
}

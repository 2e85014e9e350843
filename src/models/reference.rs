use std::fmt;

use serde::{Deserialize, Serialize};

/// Demographic age bands used by the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "0-18")]
    Youth,
    #[serde(rename = "19-40")]
    Adult,
    #[serde(rename = ">40")]
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Youth, AgeGroup::Adult, AgeGroup::Senior];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Youth => "0-18",
            AgeGroup::Adult => "19-40",
            AgeGroup::Senior => ">40",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Which genders a reference entry applies to. `All` matches any request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderScope {
    Male,
    Female,
    All,
}

impl GenderScope {
    pub fn applies_to(self, gender: Gender) -> bool {
        match self {
            GenderScope::All => true,
            GenderScope::Male => gender == Gender::Male,
            GenderScope::Female => gender == Gender::Female,
        }
    }
}

/// Demographic profile driving reference resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age_group: AgeGroup,
    pub gender: Gender,
}

/// Threshold kinds a reference table may carry for one substance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Recommended,
    Minimum,
    Maximum,
    UpperLimit,
}

impl ReferenceKind {
    /// Fixed ordering used to keep resolver output deterministic.
    pub fn sort_rank(self) -> u8 {
        match self {
            ReferenceKind::Recommended => 1,
            ReferenceKind::Minimum => 2,
            ReferenceKind::Maximum => 3,
            ReferenceKind::UpperLimit => 4,
        }
    }
}

/// Governs which classification branch applies and the record sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientCategory {
    Calorie,
    Macronutrient,
    Micronutrient,
    Harmful,
}

impl NutrientCategory {
    /// Primary sort key for emitted record sets.
    pub fn sort_rank(self) -> u8 {
        match self {
            NutrientCategory::Calorie => 1,
            NutrientCategory::Macronutrient => 2,
            NutrientCategory::Micronutrient => 3,
            NutrientCategory::Harmful => 4,
        }
    }

    pub fn is_harmful(self) -> bool {
        self == NutrientCategory::Harmful
    }

    pub fn label(&self) -> &'static str {
        match self {
            NutrientCategory::Calorie => "calories",
            NutrientCategory::Macronutrient => "macronutrients",
            NutrientCategory::Micronutrient => "micronutrients",
            NutrientCategory::Harmful => "harmful substances",
        }
    }
}

/// Measurement unit a substance is tracked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "mg")]
    Milligrams,
    #[serde(rename = "mcg")]
    Micrograms,
    #[serde(rename = "kcal")]
    Kilocalories,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milligrams => "mg",
            Unit::Micrograms => "mcg",
            Unit::Kilocalories => "kcal",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A demographic-scoped threshold for one substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceValue {
    pub kind: ReferenceKind,
    pub value: f64,
    pub unit: Unit,
    pub label: String,
    pub color: String,
    pub category: NutrientCategory,
}

impl ReferenceValue {
    pub fn new(
        kind: ReferenceKind,
        value: f64,
        unit: Unit,
        label: &str,
        color: &str,
        category: NutrientCategory,
    ) -> Self {
        Self {
            kind,
            value,
            unit,
            label: label.to_string(),
            color: color.to_string(),
            category,
        }
    }

    /// The same threshold rescaled, e.g. a daily allowance scaled to a week.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            value: self.value * factor,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_scope_applies() {
        assert!(GenderScope::All.applies_to(Gender::Male));
        assert!(GenderScope::All.applies_to(Gender::Female));
        assert!(GenderScope::Female.applies_to(Gender::Female));
        assert!(!GenderScope::Female.applies_to(Gender::Male));
    }

    #[test]
    fn test_category_sort_rank_order() {
        assert!(NutrientCategory::Calorie.sort_rank() < NutrientCategory::Macronutrient.sort_rank());
        assert!(
            NutrientCategory::Macronutrient.sort_rank() < NutrientCategory::Micronutrient.sort_rank()
        );
        assert!(NutrientCategory::Micronutrient.sort_rank() < NutrientCategory::Harmful.sort_rank());
    }

    #[test]
    fn test_scaled_reference() {
        let reference = ReferenceValue::new(
            ReferenceKind::Recommended,
            1500.0,
            Unit::Milligrams,
            "AI",
            "blue",
            NutrientCategory::Harmful,
        );
        let weekly = reference.scaled(7.0);
        assert!((weekly.value - 10500.0).abs() < 1e-9);
        assert_eq!(weekly.kind, ReferenceKind::Recommended);
        assert_eq!(weekly.unit, Unit::Milligrams);
    }
}

use std::path::Path;

use serde::Deserialize;

use crate::error::{NutriError, Result};
use crate::models::{
    AgeGroup, GenderScope, NutrientCategory, Profile, ReferenceKind, ReferenceValue, Unit,
};

/// One row of the reference table: a threshold scoped to an age group and
/// a gender scope.
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    pub substance: String,
    pub age_group: AgeGroup,
    pub gender: GenderScope,
    pub reference: ReferenceValue,
}

/// CSV row shape for user-supplied tables.
#[derive(Debug, Deserialize)]
struct CsvRow {
    substance: String,
    age_group: AgeGroup,
    gender: GenderScope,
    kind: ReferenceKind,
    value: f64,
    unit: Unit,
    label: String,
    color: String,
    category: NutrientCategory,
}

/// Static reference-value table keyed by (substance, age group, gender).
///
/// Resolution is deterministic for a fixed input: matching entries are
/// sorted by reference-kind rank, then value.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// Load a custom table from a CSV file with the columns
    /// `substance,age_group,gender,kind,value,unit,label,color,category`.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut entries = Vec::new();

        for row in reader.deserialize() {
            let row: CsvRow = row?;
            if row.value <= 0.0 {
                return Err(NutriError::InvalidInput(format!(
                    "reference value for {} must be positive",
                    row.substance
                )));
            }
            entries.push(ReferenceEntry {
                substance: row.substance,
                age_group: row.age_group,
                gender: row.gender,
                reference: ReferenceValue {
                    kind: row.kind,
                    value: row.value,
                    unit: row.unit,
                    label: row.label,
                    color: row.color,
                    category: row.category,
                },
            });
        }

        Ok(Self { entries })
    }

    /// All references applying to a substance under the given profile.
    ///
    /// Empty when the substance is unknown; the record builder skips such
    /// substances entirely.
    pub fn resolve(&self, substance: &str, profile: &Profile) -> Vec<ReferenceValue> {
        let mut matches: Vec<ReferenceValue> = self
            .entries
            .iter()
            .filter(|entry| {
                entry.substance == substance
                    && entry.age_group == profile.age_group
                    && entry.gender.applies_to(profile.gender)
            })
            .map(|entry| entry.reference.clone())
            .collect();

        matches.sort_by(|a, b| {
            a.kind
                .sort_rank()
                .cmp(&b.kind.sort_rank())
                .then_with(|| a.value.total_cmp(&b.value))
        });
        matches
    }

    /// Unique substance names known to the table, sorted.
    pub fn substances(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.substance.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Native unit a substance is tracked in.
    pub fn unit_of(&self, substance: &str) -> Option<Unit> {
        self.entries
            .iter()
            .find(|e| e.substance == substance)
            .map(|e| e.reference.unit)
    }

    /// Category a substance belongs to.
    pub fn category_of(&self, substance: &str) -> Option<NutrientCategory> {
        self.entries
            .iter()
            .find(|e| e.substance == substance)
            .map(|e| e.reference.category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The reference data shipped with the application.
    pub fn builtin() -> Self {
        use AgeGroup::{Adult, Senior, Youth};
        use GenderScope::{All, Female, Male};
        use NutrientCategory::{Calorie, Harmful, Macronutrient, Micronutrient};
        use ReferenceKind::{Maximum, Minimum, Recommended, UpperLimit};
        use Unit::{Grams, Kilocalories, Micrograms, Milligrams};

        let mut entries = Vec::new();
        {
            let mut add = |substance: &str,
                           age: AgeGroup,
                           gender: GenderScope,
                           kind: ReferenceKind,
                           value: f64,
                           unit: Unit,
                           label: &str,
                           color: &str,
                           category: NutrientCategory| {
                entries.push(ReferenceEntry {
                    substance: substance.to_string(),
                    age_group: age,
                    gender,
                    reference: ReferenceValue::new(kind, value, unit, label, color, category),
                });
            };

            // calories
            add("calories", Youth, All, Recommended, 1800.0, Kilocalories, "DRI", "blue", Calorie);
            add("calories", Youth, All, Maximum, 2400.0, Kilocalories, "Max", "orange", Calorie);
            add("calories", Adult, Male, Recommended, 2400.0, Kilocalories, "DRI", "blue", Calorie);
            add("calories", Adult, Male, Maximum, 3000.0, Kilocalories, "Max", "orange", Calorie);
            add("calories", Adult, Female, Recommended, 2000.0, Kilocalories, "DRI", "blue", Calorie);
            add("calories", Adult, Female, Maximum, 2500.0, Kilocalories, "Max", "orange", Calorie);
            add("calories", Senior, Male, Recommended, 2200.0, Kilocalories, "DRI", "blue", Calorie);
            add("calories", Senior, Male, Maximum, 2800.0, Kilocalories, "Max", "orange", Calorie);
            add("calories", Senior, Female, Recommended, 1800.0, Kilocalories, "DRI", "blue", Calorie);
            add("calories", Senior, Female, Maximum, 2300.0, Kilocalories, "Max", "orange", Calorie);

            // protein
            add("protein", Youth, All, Recommended, 52.0, Grams, "RDA", "blue", Macronutrient);
            for age in [Adult, Senior] {
                add("protein", age, Male, Recommended, 56.0, Grams, "RDA", "blue", Macronutrient);
                add("protein", age, Female, Recommended, 46.0, Grams, "RDA", "blue", Macronutrient);
            }

            // carbohydrate
            for age in AgeGroup::ALL {
                add("carbohydrate", age, All, Recommended, 130.0, Grams, "RDA", "blue", Macronutrient);
                add("carbohydrate", age, All, Maximum, 325.0, Grams, "Max", "orange", Macronutrient);
            }

            // fat carries a band rather than a single target
            for age in AgeGroup::ALL {
                add("fat", age, All, Minimum, 44.0, Grams, "Min", "teal", Macronutrient);
                add("fat", age, All, Maximum, 97.0, Grams, "Max", "orange", Macronutrient);
            }

            // fiber
            add("fiber", Youth, All, Recommended, 26.0, Grams, "AI", "blue", Macronutrient);
            add("fiber", Adult, Male, Recommended, 38.0, Grams, "AI", "blue", Macronutrient);
            add("fiber", Adult, Female, Recommended, 25.0, Grams, "AI", "blue", Macronutrient);
            add("fiber", Senior, Male, Recommended, 30.0, Grams, "AI", "blue", Macronutrient);
            add("fiber", Senior, Female, Recommended, 21.0, Grams, "AI", "blue", Macronutrient);

            // sugar (added)
            for age in AgeGroup::ALL {
                add("sugar", age, All, Recommended, 50.0, Grams, "AI", "blue", Harmful);
                add("sugar", age, All, UpperLimit, 100.0, Grams, "UL", "red", Harmful);
            }

            // saturated fat
            for age in AgeGroup::ALL {
                add("saturated-fat", age, All, Recommended, 20.0, Grams, "AI", "blue", Harmful);
                add("saturated-fat", age, All, UpperLimit, 30.0, Grams, "UL", "red", Harmful);
            }

            // sodium
            for age in AgeGroup::ALL {
                add("sodium", age, All, Recommended, 1500.0, Milligrams, "AI", "blue", Harmful);
                add("sodium", age, All, UpperLimit, 2300.0, Milligrams, "UL", "red", Harmful);
            }

            // cholesterol
            for age in AgeGroup::ALL {
                add("cholesterol", age, All, Recommended, 300.0, Milligrams, "AI", "blue", Harmful);
            }

            // potassium
            add("potassium", Youth, All, Recommended, 2500.0, Milligrams, "AI", "blue", Micronutrient);
            for age in [Adult, Senior] {
                add("potassium", age, Male, Recommended, 3400.0, Milligrams, "AI", "blue", Micronutrient);
                add("potassium", age, Female, Recommended, 2600.0, Milligrams, "AI", "blue", Micronutrient);
            }

            // calcium
            add("calcium", Youth, All, Recommended, 1300.0, Milligrams, "RDA", "blue", Micronutrient);
            add("calcium", Adult, All, Recommended, 1000.0, Milligrams, "RDA", "blue", Micronutrient);
            add("calcium", Senior, All, Recommended, 1200.0, Milligrams, "RDA", "blue", Micronutrient);
            for age in AgeGroup::ALL {
                add("calcium", age, All, UpperLimit, 2500.0, Milligrams, "UL", "red", Micronutrient);
            }

            // iron
            add("iron", Youth, All, Recommended, 11.0, Milligrams, "RDA", "blue", Micronutrient);
            add("iron", Adult, Male, Recommended, 8.0, Milligrams, "RDA", "blue", Micronutrient);
            add("iron", Adult, Female, Recommended, 18.0, Milligrams, "RDA", "blue", Micronutrient);
            add("iron", Senior, All, Recommended, 8.0, Milligrams, "RDA", "blue", Micronutrient);
            for age in AgeGroup::ALL {
                add("iron", age, All, UpperLimit, 45.0, Milligrams, "UL", "red", Micronutrient);
            }

            // magnesium
            add("magnesium", Youth, All, Recommended, 360.0, Milligrams, "RDA", "blue", Micronutrient);
            for age in [Adult, Senior] {
                add("magnesium", age, Male, Recommended, 420.0, Milligrams, "RDA", "blue", Micronutrient);
                add("magnesium", age, Female, Recommended, 320.0, Milligrams, "RDA", "blue", Micronutrient);
            }

            // vitamin C
            add("vitamin-c", Youth, All, Recommended, 65.0, Milligrams, "RDA", "blue", Micronutrient);
            for age in [Adult, Senior] {
                add("vitamin-c", age, Male, Recommended, 90.0, Milligrams, "RDA", "blue", Micronutrient);
                add("vitamin-c", age, Female, Recommended, 75.0, Milligrams, "RDA", "blue", Micronutrient);
            }
            for age in AgeGroup::ALL {
                add("vitamin-c", age, All, UpperLimit, 2000.0, Milligrams, "UL", "red", Micronutrient);
            }

            // vitamin D
            add("vitamin-d", Youth, All, Recommended, 15.0, Micrograms, "RDA", "blue", Micronutrient);
            add("vitamin-d", Adult, All, Recommended, 15.0, Micrograms, "RDA", "blue", Micronutrient);
            add("vitamin-d", Senior, All, Recommended, 20.0, Micrograms, "RDA", "blue", Micronutrient);
            for age in AgeGroup::ALL {
                add("vitamin-d", age, All, UpperLimit, 100.0, Micrograms, "UL", "red", Micronutrient);
            }
        }

        Self { entries }
    }
}

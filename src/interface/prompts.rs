use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::data::ReferenceTable;
use crate::error::{NutriError, Result};
use crate::models::{
    AgeGroup, Gender, LoggedFood, MealType, NutrientCategory, NutrientReading, Profile,
    ReadingCategory, Unit,
};

/// Minimum jaro-winkler similarity for a fuzzy substance match.
const MATCH_THRESHOLD: f64 = 0.85;

/// Prompt for the demographic profile.
pub fn prompt_profile() -> Result<Profile> {
    let age_labels: Vec<&str> = AgeGroup::ALL.iter().map(|a| a.label()).collect();
    let age_selection = Select::new()
        .with_prompt("Age group")
        .items(&age_labels)
        .default(1)
        .interact()?;

    let gender_labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
    let gender_selection = Select::new()
        .with_prompt("Gender")
        .items(&gender_labels)
        .default(0)
        .interact()?;

    Ok(Profile {
        age_group: AgeGroup::ALL[age_selection],
        gender: Gender::ALL[gender_selection],
    })
}

/// Prompt for the meal slot.
pub fn prompt_meal_type() -> Result<MealType> {
    let labels: Vec<&str> = MealType::ALL.iter().map(|m| m.label()).collect();
    let selection = Select::new()
        .with_prompt("Meal")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MealType::ALL[selection])
}

/// Prompt for the food name.
pub fn prompt_food_name() -> Result<String> {
    let input: String = Input::new().with_prompt("Food name").interact_text()?;
    let input = input.trim().to_string();
    if input.is_empty() {
        return Err(NutriError::InvalidInput("food name is empty".to_string()));
    }
    Ok(input)
}

/// Prompt for an amount in the substance's native unit.
pub fn prompt_amount(substance: &str, unit: Unit) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Amount of {} ({})", substance, unit))
        .interact_text()?;

    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;
    if !amount.is_finite() {
        return Err(NutriError::InvalidInput("Invalid number".to_string()));
    }
    Ok(amount)
}

/// Match user input against the known substances: exact (case-insensitive)
/// first, then the best fuzzy candidate above the threshold.
fn match_substance(input: &str, known: &[String]) -> Option<String> {
    let lowered = input.to_lowercase();
    if let Some(exact) = known.iter().find(|name| name.as_str() == lowered) {
        return Some(exact.clone());
    }

    known
        .iter()
        .map(|name| (name, jaro_winkler(&lowered, name)))
        .filter(|(_, similarity)| *similarity >= MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.clone())
}

/// Reading category implied by the reference table's view of a substance.
fn reading_category(category: Option<NutrientCategory>) -> ReadingCategory {
    match category {
        Some(NutrientCategory::Harmful) => ReadingCategory::Bad,
        Some(_) => ReadingCategory::Good,
        None => ReadingCategory::Neutral,
    }
}

/// Collect one food entry: name, meal slot, and per-substance readings.
///
/// Substances are matched against the reference table; unknown names can
/// still be logged (they stay invisible in reports until a reference
/// exists for them).
pub fn collect_food_entry(references: &ReferenceTable) -> Result<LoggedFood> {
    let name = prompt_food_name()?;
    let meal_type = prompt_meal_type()?;
    let known = references.substances();

    let mut readings = Vec::new();
    loop {
        let input: String = Input::new()
            .with_prompt("Substance (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_string();
        if input.is_empty() {
            break;
        }

        let substance = match match_substance(&input, &known) {
            Some(matched) => {
                if matched != input {
                    println!("Using: {}", matched);
                }
                matched
            }
            None => {
                let keep = Confirm::new()
                    .with_prompt(format!(
                        "'{}' is not in the reference table. Log it anyway?",
                        input
                    ))
                    .default(false)
                    .interact()?;
                if !keep {
                    continue;
                }
                input
            }
        };

        let unit = references.unit_of(&substance).unwrap_or(Unit::Grams);
        let amount = prompt_amount(&substance, unit)?;
        let category = reading_category(references.category_of(&substance));

        readings.push(NutrientReading::new(&substance, category, amount, meal_type));
    }

    Ok(LoggedFood {
        name,
        meal_type,
        readings,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec![
            "calcium".to_string(),
            "carbohydrate".to_string(),
            "sodium".to_string(),
            "vitamin-c".to_string(),
        ]
    }

    #[test]
    fn test_match_exact_case_insensitive() {
        assert_eq!(match_substance("Sodium", &known()), Some("sodium".to_string()));
    }

    #[test]
    fn test_match_fuzzy_typo() {
        assert_eq!(match_substance("sodum", &known()), Some("sodium".to_string()));
        assert_eq!(
            match_substance("carbohydrates", &known()),
            Some("carbohydrate".to_string())
        );
    }

    #[test]
    fn test_no_match_below_threshold() {
        assert_eq!(match_substance("zinc", &known()), None);
    }

    #[test]
    fn test_reading_category_mapping() {
        assert_eq!(
            reading_category(Some(NutrientCategory::Harmful)),
            ReadingCategory::Bad
        );
        assert_eq!(
            reading_category(Some(NutrientCategory::Micronutrient)),
            ReadingCategory::Good
        );
        assert_eq!(reading_category(None), ReadingCategory::Neutral);
    }
}

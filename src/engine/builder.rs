use std::collections::HashMap;

use crate::data::{EducationLibrary, ReferenceTable};
use crate::engine::classify::classify;
use crate::engine::layers::{annotate_positions, compute_layers, reference_basis};
use crate::engine::units::display_amount;
use crate::models::{ComparisonRecord, DisplayScale, Profile, VisualConfig};

/// Build one comparison record per aggregated substance.
///
/// Substances the reference table does not know are skipped entirely
/// rather than emitted as partial records. Output order: category rank
/// (calories, macronutrients, micronutrients, harmful), then substance
/// name ascending.
pub fn build_comparison_records(
    totals: &HashMap<String, f64>,
    profile: &Profile,
    references: &ReferenceTable,
    education: &EducationLibrary,
    scale: &DisplayScale,
) -> Vec<ComparisonRecord> {
    let mut records = Vec::new();

    for (substance, &consumed) in totals {
        let resolved = references.resolve(substance, profile);
        if resolved.is_empty() {
            continue;
        }
        let Some(basis) = reference_basis(&resolved) else {
            continue;
        };

        let category = resolved[0].category;
        let unit = resolved[0].unit;

        records.push(ComparisonRecord {
            substance: substance.clone(),
            category,
            consumed,
            unit,
            display_amount: display_amount(consumed, unit),
            status: classify(consumed, &resolved, category),
            layers: compute_layers(consumed, basis, scale),
            reference_values: annotate_positions(&resolved, basis),
            visual_config: VisualConfig::from(scale),
            education: education.lookup(substance),
        });
    }

    sort_records(&mut records);
    records
}

/// Canonical record-set ordering shared by the daily and weekly builders.
pub(crate) fn sort_records(records: &mut [ComparisonRecord]) {
    records.sort_by(|a, b| {
        a.category
            .sort_rank()
            .cmp(&b.category.sort_rank())
            .then_with(|| a.substance.cmp(&b.substance))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeGroup, Gender, NutrientCategory, Status};

    fn adult_male() -> Profile {
        Profile {
            age_group: AgeGroup::Adult,
            gender: Gender::Male,
        }
    }

    fn build(totals: &[(&str, f64)]) -> Vec<ComparisonRecord> {
        let totals: HashMap<String, f64> = totals
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect();
        build_comparison_records(
            &totals,
            &adult_male(),
            &ReferenceTable::builtin(),
            &EducationLibrary::builtin(),
            &DisplayScale::default(),
        )
    }

    #[test]
    fn test_unknown_substance_is_skipped() {
        let records = build(&[("protein", 50.0), ("unobtainium", 9.0)]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].substance, "protein");
    }

    #[test]
    fn test_sort_order_category_then_name() {
        let records = build(&[
            ("sodium", 1000.0),
            ("iron", 8.0),
            ("calcium", 900.0),
            ("protein", 50.0),
            ("calories", 2200.0),
        ]);

        let names: Vec<&str> = records.iter().map(|r| r.substance.as_str()).collect();
        assert_eq!(names, vec!["calories", "protein", "calcium", "iron", "sodium"]);
    }

    #[test]
    fn test_record_composition() {
        let records = build(&[("sodium", 1000.0)]);
        let record = &records[0];

        assert_eq!(record.category, NutrientCategory::Harmful);
        assert_eq!(record.status, Status::Optimal);
        assert_eq!(record.display_amount, "1.0 g");
        assert_eq!(record.reference_values.len(), 2);
        assert_eq!(record.layers.len(), 1);
        assert_eq!(record.education.title, "Sodium");
    }

    #[test]
    fn test_zero_consumption_has_no_layers() {
        let records = build(&[("fiber", 0.0)]);
        assert_eq!(records.len(), 1);
        assert!(records[0].layers.is_empty());
        assert_eq!(records[0].status, Status::Deficient);
    }
}
